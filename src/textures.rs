//! Texture keys and sprite metrics.
//!
//! Assets are referenced symbolically: a `TextureKey` carries the asset
//! name the sprite sheet uses, the sprite's fixed pixel size, and the
//! glyph/color the terminal renderer substitutes for the bitmap. Game code
//! never touches asset-name strings directly.

use crate::world::types::{CactusSize, DinoState};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKey {
    DinoRun1,
    DinoRun2,
    DinoDuck1,
    DinoDuck2,
    DinoCrash1,
    Bird1,
    Bird2,
    CactusLarge1,
    CactusLarge2,
    CactusLarge3,
    CactusSmall1,
    CactusSmall2,
    CactusSmall3,
    Horizon1,
    Horizon2,
    Cloud,
}

impl TextureKey {
    /// Asset file stem this key stands for.
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::DinoRun1 => "dino-run-1",
            Self::DinoRun2 => "dino-run-2",
            Self::DinoDuck1 => "dino-duck-1",
            Self::DinoDuck2 => "dino-duck-2",
            Self::DinoCrash1 => "dino-crash-1",
            Self::Bird1 => "bird-1",
            Self::Bird2 => "bird-2",
            Self::CactusLarge1 => "cactus-large-1",
            Self::CactusLarge2 => "cactus-large-2",
            Self::CactusLarge3 => "cactus-large-3",
            Self::CactusSmall1 => "cactus-small-1",
            Self::CactusSmall2 => "cactus-small-2",
            Self::CactusSmall3 => "cactus-small-3",
            Self::Horizon1 => "horizon-1",
            Self::Horizon2 => "horizon-2",
            Self::Cloud => "cloud",
        }
    }

    /// Sprite size in world pixels (width, height). Higher cactus variants
    /// are wider clusters of the same plant. Sizes are tuned so every
    /// obstacle class stays avoidable under the fixed jump arc (impulse 6,
    /// gravity 0.4 gives ~62px of air travel at run speed).
    pub fn size(&self) -> (f64, f64) {
        match self {
            Self::DinoRun1 | Self::DinoRun2 | Self::DinoCrash1 => (16.0, 24.0),
            Self::DinoDuck1 | Self::DinoDuck2 => (24.0, 12.0),
            Self::Bird1 | Self::Bird2 => (24.0, 12.0),
            Self::CactusLarge1 => (14.0, 28.0),
            Self::CactusLarge2 => (20.0, 28.0),
            Self::CactusLarge3 => (26.0, 28.0),
            Self::CactusSmall1 => (10.0, 20.0),
            Self::CactusSmall2 => (14.0, 20.0),
            Self::CactusSmall3 => (18.0, 20.0),
            Self::Horizon1 | Self::Horizon2 => (600.0, 12.0),
            Self::Cloud => (40.0, 12.0),
        }
    }

    /// Glyph and color the renderer fills the sprite's cells with.
    pub fn glyph(&self) -> (char, Color) {
        match self {
            Self::DinoRun1 | Self::DinoRun2 => ('█', Color::White),
            Self::DinoDuck1 | Self::DinoDuck2 => ('▄', Color::White),
            Self::DinoCrash1 => ('█', Color::Red),
            Self::Bird1 => ('^', Color::Yellow),
            Self::Bird2 => ('v', Color::Yellow),
            Self::CactusLarge1 | Self::CactusLarge2 | Self::CactusLarge3 => ('█', Color::Green),
            Self::CactusSmall1 | Self::CactusSmall2 | Self::CactusSmall3 => ('▓', Color::Green),
            Self::Horizon1 => ('═', Color::DarkGray),
            Self::Horizon2 => ('─', Color::DarkGray),
            Self::Cloud => ('░', Color::Gray),
        }
    }
}

/// Texture shown once the session is over and the crash pose is frozen.
pub const CRASHED: TextureKey = TextureKey::DinoCrash1;

/// Dino texture for the current state and animation clock.
///
/// Two-frame toggle at the animation cadence. Crashing shares the run
/// frames here: the crash pose is applied by the game-over branch on the
/// frame after the collision, matching the session update order.
pub fn dino_texture(state: DinoState, anim_offset: u64) -> TextureKey {
    let frame = anim_offset % 2;
    match state {
        DinoState::Ducking => {
            if frame == 0 {
                TextureKey::DinoDuck1
            } else {
                TextureKey::DinoDuck2
            }
        }
        _ => {
            if frame == 0 {
                TextureKey::DinoRun1
            } else {
                TextureKey::DinoRun2
            }
        }
    }
}

/// Bird texture: two-frame flap at half the dino's cadence.
pub fn bird_texture(anim_offset: u64) -> TextureKey {
    if (anim_offset / 2) % 2 == 0 {
        TextureKey::Bird1
    } else {
        TextureKey::Bird2
    }
}

/// Cactus texture for a size class and visual variant (1..=3).
pub fn cactus_texture(size: CactusSize, variant: u8) -> TextureKey {
    match (size, variant) {
        (CactusSize::Large, 1) => TextureKey::CactusLarge1,
        (CactusSize::Large, 2) => TextureKey::CactusLarge2,
        (CactusSize::Large, _) => TextureKey::CactusLarge3,
        (CactusSize::Small, 1) => TextureKey::CactusSmall1,
        (CactusSize::Small, 2) => TextureKey::CactusSmall2,
        (CactusSize::Small, _) => TextureKey::CactusSmall3,
    }
}

/// Ground segment texture for a visual variant (1..=2).
pub fn horizon_texture(variant: u8) -> TextureKey {
    if variant == 1 {
        TextureKey::Horizon1
    } else {
        TextureKey::Horizon2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dino_texture_running_alternates() {
        assert_eq!(dino_texture(DinoState::Running, 0), TextureKey::DinoRun1);
        assert_eq!(dino_texture(DinoState::Running, 1), TextureKey::DinoRun2);
        assert_eq!(dino_texture(DinoState::Running, 2), TextureKey::DinoRun1);
    }

    #[test]
    fn test_dino_texture_ducking_uses_duck_frames() {
        assert_eq!(dino_texture(DinoState::Ducking, 0), TextureKey::DinoDuck1);
        assert_eq!(dino_texture(DinoState::Ducking, 3), TextureKey::DinoDuck2);
    }

    #[test]
    fn test_dino_texture_jumping_uses_run_frames() {
        assert_eq!(dino_texture(DinoState::Jumping, 0), TextureKey::DinoRun1);
        assert_eq!(dino_texture(DinoState::Idling, 1), TextureKey::DinoRun2);
    }

    #[test]
    fn test_bird_texture_flaps_at_half_cadence() {
        assert_eq!(bird_texture(0), TextureKey::Bird1);
        assert_eq!(bird_texture(1), TextureKey::Bird1);
        assert_eq!(bird_texture(2), TextureKey::Bird2);
        assert_eq!(bird_texture(3), TextureKey::Bird2);
        assert_eq!(bird_texture(4), TextureKey::Bird1);
    }

    #[test]
    fn test_asset_names_follow_convention() {
        assert_eq!(TextureKey::DinoRun1.asset_name(), "dino-run-1");
        assert_eq!(TextureKey::DinoCrash1.asset_name(), "dino-crash-1");
        assert_eq!(
            cactus_texture(CactusSize::Large, 2).asset_name(),
            "cactus-large-2"
        );
        assert_eq!(
            cactus_texture(CactusSize::Small, 3).asset_name(),
            "cactus-small-3"
        );
        assert_eq!(horizon_texture(1).asset_name(), "horizon-1");
        assert_eq!(horizon_texture(2).asset_name(), "horizon-2");
        assert_eq!(TextureKey::Cloud.asset_name(), "cloud");
    }

    #[test]
    fn test_duck_sprite_is_wider_and_shorter() {
        let (run_w, run_h) = TextureKey::DinoRun1.size();
        let (duck_w, duck_h) = TextureKey::DinoDuck1.size();
        assert!(duck_w > run_w);
        assert!(duck_h < run_h);
    }

    #[test]
    fn test_cactus_variants_widen() {
        for size in [CactusSize::Small, CactusSize::Large] {
            let w1 = cactus_texture(size, 1).size().0;
            let w2 = cactus_texture(size, 2).size().0;
            let w3 = cactus_texture(size, 3).size().0;
            assert!(w1 < w2 && w2 < w3);
        }
    }
}
