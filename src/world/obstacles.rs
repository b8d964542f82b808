//! Obstacle placement and collision queries.
//!
//! Ground cacti are append-only; the bird is a single slot that placement
//! passes reposition but never duplicate.

use super::types::{Bird, Cactus, CactusSize, Rect};
use crate::constants::*;
use crate::textures::TextureKey;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub cacti: Vec<Cactus>,
    pub bird: Bird,
}

impl ObstacleField {
    /// Session-start layout: the bird parked near the right end of the
    /// strip, then one placement pass over the span past the first screen.
    /// With the camera goal at the origin the bird is on-camera by the
    /// gate's definition, so the first pass only plants cacti.
    pub fn generate<R: Rng>(camera_lookahead: f64, rng: &mut R) -> Self {
        let bird_width = TextureKey::Bird1.size().0;
        let mut field = Self {
            cacti: Vec::new(),
            bird: Bird {
                left: LEVEL_WIDTH - BIRD_PARK_MARGIN - bird_width,
                bottom: 100.0,
                texture: TextureKey::Bird1,
            },
        };
        field.place(FIRST_OBSTACLE_X, LEVEL_WIDTH, camera_lookahead, rng);
        field
    }

    /// Fill `[x_min, x_max)` with spaced obstacles, left to right.
    ///
    /// At each cursor position a 1-in-5 draw places the bird, but only if
    /// the bird slot was fully behind the camera lookahead when the pass
    /// started; the gate is evaluated once so a pass that repositions the
    /// bird ahead of the camera cannot immediately reuse it. Otherwise a
    /// cactus of random size and variant is appended, and the cursor skips
    /// an extra obstacle width past it on top of the randomized gap.
    pub fn place<R: Rng>(&mut self, x_min: f64, x_max: f64, camera_lookahead: f64, rng: &mut R) {
        let bird_off_camera = self.bird.footprint().right() < camera_lookahead;

        let mut cursor = x_min;
        while cursor < x_max {
            if rng.gen_range(1..=5) == 1 && bird_off_camera {
                self.bird.bottom = rng.gen_range(BIRD_BOTTOM_MIN..=BIRD_BOTTOM_MAX);
                self.bird.left = cursor;
                cursor += self.bird.width() + rng.gen_range(GAP_MIN..=GAP_MAX);
            } else {
                let cactus = Cactus {
                    left: cursor,
                    size: if rng.gen::<bool>() {
                        CactusSize::Large
                    } else {
                        CactusSize::Small
                    },
                    variant: rng.gen_range(1..=3),
                };
                cursor += cactus.width() * 2.0 + rng.gen_range(GAP_MIN..=GAP_MAX);
                self.cacti.push(cactus);
            }
        }
    }

    /// True if the footprint overlaps any active obstacle.
    pub fn hit_test(&self, footprint: &Rect) -> bool {
        self.bird.footprint().overlaps(footprint)
            || self.cacti.iter().any(|c| c.footprint().overlaps(footprint))
    }
}
