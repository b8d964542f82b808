//! Terminal rendering. Pure presentation: reads session state after the
//! update step, never mutates it.

pub mod scene;
