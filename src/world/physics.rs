//! Platformer physics for the runner.
//!
//! Reproduces the collaborator contract the session depends on: per-frame
//! gravity integration, snapping onto a segment's walkable band when
//! descending through it, and a grounded-gated jump impulse.

use super::player::Player;
use super::terrain::Terrain;
use crate::constants::*;

/// Advance the player one frame: apply velocities, then either snap onto
/// the ground band or accelerate downward.
pub fn integrate(player: &mut Player, terrain: &Terrain) {
    player.x += player.vx;
    let prev_feet = player.y;
    player.y += player.vy;

    let footprint = player.footprint();
    let supported = terrain.supports(footprint.left, footprint.right());

    // Descending (or resting) through the walkable top edge of supported
    // ground lands the player exactly on it.
    if player.vy <= 0.0 && supported && prev_feet >= GROUND_TOP && player.y <= GROUND_TOP {
        player.y = GROUND_TOP;
        player.vy = 0.0;
    } else {
        player.vy -= GRAVITY;
    }
}

/// Set the upward impulse, only when grounded. Airborne calls are ignored,
/// so holding or mashing the jump key cannot re-trigger mid-flight.
pub fn jump(player: &mut Player, impulse: f64) {
    if player.is_grounded() {
        player.vy = impulse;
    }
}
