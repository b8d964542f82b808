//! Core world entities and geometry.

use crate::constants::*;
use crate::textures::{self, TextureKey};

/// Axis-aligned collision footprint, y-up. Distinct from a sprite's visual
/// bounds: entities expose the rectangle that actually collides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    /// Strict overlap: touching edges do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.bottom < other.top()
            && other.bottom < self.top()
    }
}

/// Player animation/state tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DinoState {
    Idling,
    Running,
    Jumping,
    Ducking,
    Crashing,
}

/// Session phase. Crashing the player moves the session to `GameOver`;
/// only an explicit reset returns it to `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Playing,
    GameOver,
}

/// One fixed-width ground tile. Segments form a contiguous left-to-right
/// strip; only a thin band below the walkable top edge is collidable.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub left: f64,
    /// Visual variant, 1..=2, chosen at session setup.
    pub variant: u8,
}

impl Segment {
    pub fn right(&self) -> f64 {
        self.left + GROUND_WIDTH
    }

    pub fn texture(&self) -> TextureKey {
        textures::horizon_texture(self.variant)
    }

    /// Walkable collision band: the top `GROUND_BAND_THICKNESS` pixels
    /// ending at `GROUND_TOP`, not the full sprite bounds.
    pub fn band(&self) -> Rect {
        Rect::new(
            self.left,
            GROUND_TOP - GROUND_BAND_THICKNESS,
            GROUND_WIDTH,
            GROUND_BAND_THICKNESS,
        )
    }
}

/// Cactus size class. Large cacti sit 4px lower than small ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CactusSize {
    Small,
    Large,
}

/// A static ground obstacle. Appended during placement passes, never
/// recycled.
#[derive(Debug, Clone, Copy)]
pub struct Cactus {
    pub left: f64,
    pub size: CactusSize,
    /// Visual variant, 1..=3. Wider clusters for higher variants.
    pub variant: u8,
}

impl Cactus {
    pub fn texture(&self) -> TextureKey {
        textures::cactus_texture(self.size, self.variant)
    }

    pub fn width(&self) -> f64 {
        self.texture().size().0
    }

    pub fn bottom(&self) -> f64 {
        match self.size {
            CactusSize::Large => CACTUS_LARGE_BOTTOM,
            CactusSize::Small => CACTUS_SMALL_BOTTOM,
        }
    }

    pub fn footprint(&self) -> Rect {
        let (w, h) = self.texture().size();
        Rect::new(self.left, self.bottom(), w, h)
    }
}

/// The single flying obstacle. There is exactly one bird per session; the
/// placer repositions this slot instead of spawning new instances.
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub left: f64,
    pub bottom: f64,
    pub texture: TextureKey,
}

impl Bird {
    pub fn width(&self) -> f64 {
        TextureKey::Bird1.size().0
    }

    pub fn footprint(&self) -> Rect {
        let (w, h) = TextureKey::Bird1.size();
        Rect::new(self.left, self.bottom, w, h)
    }
}

/// Decorative background cloud. Lives in screen space (no camera
/// translation) and never collides.
#[derive(Debug, Clone, Copy)]
pub struct Cloud {
    pub left: f64,
    /// Top edge, since spawn heights are given as a top band.
    pub top: f64,
}

impl Cloud {
    pub fn width(&self) -> f64 {
        TextureKey::Cloud.size().0
    }

    pub fn right(&self) -> f64 {
        self.left + self.width()
    }
}

/// Viewport tracker. The goal position is what the session steers toward;
/// the current position is where the viewport actually is. Spawn gating
/// compares against the goal, not the current position.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    x: f64,
    goal_x: f64,
}

impl Camera {
    pub fn new() -> Self {
        Self { x: 0.0, goal_x: 0.0 }
    }

    /// Set the tracking goal for this frame.
    pub fn move_to(&mut self, goal_x: f64) {
        self.goal_x = goal_x;
    }

    /// Advance the current position toward the goal.
    pub fn update(&mut self) {
        self.x += (self.goal_x - self.x) * CAMERA_SPEED;
    }

    /// Left edge of the viewport as currently positioned.
    pub fn left_bound(&self) -> f64 {
        self.x
    }

    /// Goal position used for off-camera spawn decisions.
    pub fn lookahead(&self) -> f64 {
        self.goal_x
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap_basics() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 0.0, 5.0, 5.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&b), "shared vertical edge is not a collision");
        assert!(!a.overlaps(&c), "shared horizontal edge is not a collision");
    }

    #[test]
    fn test_segment_band_is_thin_and_top_aligned() {
        let seg = Segment {
            left: 600.0,
            variant: 1,
        };
        let band = seg.band();
        assert!((band.top() - GROUND_TOP).abs() < f64::EPSILON);
        assert!((band.height - GROUND_BAND_THICKNESS).abs() < f64::EPSILON);
        assert!((band.width - GROUND_WIDTH).abs() < f64::EPSILON);
        let (_, sprite_h) = seg.texture().size();
        assert!(
            band.height < sprite_h,
            "collision band must be thinner than the sprite"
        );
    }

    #[test]
    fn test_cactus_base_offset_by_size() {
        let large = Cactus {
            left: 0.0,
            size: CactusSize::Large,
            variant: 1,
        };
        let small = Cactus {
            left: 0.0,
            size: CactusSize::Small,
            variant: 1,
        };
        assert!((large.bottom() - CACTUS_LARGE_BOTTOM).abs() < f64::EPSILON);
        assert!((small.bottom() - CACTUS_SMALL_BOTTOM).abs() < f64::EPSILON);
        assert!(large.bottom() < small.bottom());
    }

    #[test]
    fn test_camera_tracks_goal() {
        let mut camera = Camera::new();
        camera.move_to(170.0);
        assert!((camera.lookahead() - 170.0).abs() < f64::EPSILON);
        camera.update();
        assert!((camera.left_bound() - 170.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_camera_lookahead_set_before_update() {
        let mut camera = Camera::new();
        camera.move_to(50.0);
        // Goal moves immediately, the current position only on update.
        assert!((camera.lookahead() - 50.0).abs() < f64::EPSILON);
        assert!((camera.left_bound() - 0.0).abs() < f64::EPSILON);
    }
}
