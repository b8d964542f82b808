//! dinorun - terminal endless-runner library.
//!
//! Exposes the world simulation for the binary and the integration tests.

pub mod constants;
pub mod input;
pub mod textures;
pub mod ui;
pub mod world;

pub use world::{DinoInput, DinoState, GameMode, Session};
