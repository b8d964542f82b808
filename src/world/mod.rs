//! World simulation: terrain, obstacles, physics, player, session.

pub mod obstacles;
pub mod physics;
pub mod player;
pub mod session;
pub mod terrain;
pub mod types;

pub use player::{DinoInput, Player};
pub use session::Session;
pub use types::{DinoState, GameMode};
