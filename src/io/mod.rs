//! Boundary adapters between user-facing text and the engine.

pub mod input;
pub mod output;
