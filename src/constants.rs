//! World tuning constants.
//!
//! The simulation runs in a fixed 800x150 pixel coordinate space with y
//! increasing upward; the renderer scales that window onto terminal cells.

/// Visible world window, in pixels.
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 150.0;

/// Width of one ground segment.
pub const GROUND_WIDTH: f64 = 600.0;

/// Number of ground segments in the strip: enough to cover four screens.
pub const SEGMENT_COUNT: usize = (800 * 4 / 600) as usize;

/// Total width covered by the strip at session start.
pub const LEVEL_WIDTH: f64 = GROUND_WIDTH * SEGMENT_COUNT as f64;

/// Horizontal run speed while alive, pixels per frame.
pub const PLAYER_SPEED: f64 = 2.0;

/// Player left edge at session start.
pub const PLAYER_START_X: f64 = 200.0;

/// Downward velocity change per frame.
pub const GRAVITY: f64 = 0.4;

/// Upward velocity set by a jump.
pub const JUMP_IMPULSE: f64 = 6.0;

/// Walkable top edge of the ground. The player's feet rest here.
pub const GROUND_TOP: f64 = 30.0;

/// Thickness of the collision band under the walkable edge. Only this thin
/// strip of a segment is collidable, not its full sprite bounds.
pub const GROUND_BAND_THICKNESS: f64 = 4.0;

/// Bottom edge of a large cactus. Large cacti sit 4px lower than small so
/// their visual footprints line up on the ground.
pub const CACTUS_LARGE_BOTTOM: f64 = 20.0;
pub const CACTUS_SMALL_BOTTOM: f64 = 24.0;

/// Bird spawn height band (bottom edge).
pub const BIRD_BOTTOM_MIN: f64 = 40.0;
pub const BIRD_BOTTOM_MAX: f64 = 80.0;

/// Bird parking offset from the right end of the strip at session start.
pub const BIRD_PARK_MARGIN: f64 = 100.0;

/// Randomized gap between obstacles.
pub const GAP_MIN: f64 = 200.0;
pub const GAP_MAX: f64 = 400.0;

/// Left bound of the first obstacle pass at session start.
pub const FIRST_OBSTACLE_X: f64 = SCREEN_WIDTH * 0.8;

/// Camera trails the player's left edge by this margin.
pub const CAMERA_LEAD: f64 = 30.0;

/// Fraction of the goal distance the camera covers per frame.
pub const CAMERA_SPEED: f64 = 1.0;

/// Score is the player's left-edge position divided by this.
pub const SCORE_DIVISOR: u64 = 10;

/// Animation clock ticks per second of elapsed time.
pub const ANIM_CLOCK_HZ: f64 = 10.0;

/// Decorative cloud pool.
pub const MAX_CLOUDS: usize = 3;
/// Clouds drift left in screen space.
pub const CLOUD_SPEED: f64 = -0.5;
/// Cloud top-edge height band.
pub const CLOUD_TOP_MIN: f64 = 100.0;
pub const CLOUD_TOP_MAX: f64 = 140.0;
/// Re-entry slack past the right screen edge when a cloud recycles.
pub const CLOUD_RESPAWN_SLACK: f64 = SCREEN_WIDTH * 0.25;

/// Target frame interval for the terminal loop (~60 FPS).
pub const FRAME_INTERVAL_MS: u64 = 16;
