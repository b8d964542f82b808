//! Player entity and its state machine.

use super::types::{DinoState, Rect};
use crate::constants::*;
use crate::textures::TextureKey;

/// UI-agnostic input events for the runner. Press and release are distinct
/// because releasing jump or duck returns the dino to running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DinoInput {
    JumpPressed,
    JumpReleased,
    DuckPressed,
    DuckReleased,
    /// Release of any key not bound to an action. Ignored while playing;
    /// the session uses it (like every release) to restart after a crash.
    OtherReleased,
}

impl DinoInput {
    pub fn is_release(&self) -> bool {
        matches!(
            self,
            Self::JumpReleased | Self::DuckReleased | Self::OtherReleased
        )
    }
}

/// The dino. `x` is the left edge, `y` the feet, both in world pixels.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub state: DinoState,
    pub texture: TextureKey,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: PLAYER_START_X,
            y: GROUND_TOP,
            vx: 0.0,
            vy: 0.0,
            state: DinoState::Idling,
            texture: TextureKey::DinoRun1,
        }
    }

    /// Standing exactly on the ground with no vertical motion.
    pub fn is_grounded(&self) -> bool {
        self.y <= GROUND_TOP && self.vy == 0.0
    }

    /// Current collision footprint. Ducking swaps to the wider, shorter
    /// duck shape the moment the state changes, before any animation
    /// update.
    pub fn footprint(&self) -> Rect {
        let key = if self.state == DinoState::Ducking {
            TextureKey::DinoDuck1
        } else {
            TextureKey::DinoRun1
        };
        let (w, h) = key.size();
        Rect::new(self.x, self.y, w, h)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive the state machine from one input event.
///
/// Crashing is absorbing: no input transitions out of it. The session
/// owns the reset path.
pub fn apply_input(player: &mut Player, input: DinoInput) {
    if player.state == DinoState::Crashing {
        return;
    }

    match input {
        DinoInput::JumpPressed => {
            if player.is_grounded() {
                player.state = DinoState::Jumping;
                super::physics::jump(player, JUMP_IMPULSE);
            }
        }
        DinoInput::DuckPressed => {
            if player.state == DinoState::Running {
                player.state = DinoState::Ducking;
            }
        }
        DinoInput::JumpReleased | DinoInput::DuckReleased => {
            if matches!(player.state, DinoState::Jumping | DinoState::Ducking) {
                player.state = DinoState::Running;
                // Guard against sub-pixel drift leaving the dino below the
                // nominal ground height.
                if player.y < GROUND_TOP {
                    player.y = GROUND_TOP;
                }
            }
        }
        DinoInput::OtherReleased => {}
    }
}
