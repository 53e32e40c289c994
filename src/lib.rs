// Re-export core modules for use by the binary or integration tests
pub mod bot;
pub mod components;
pub mod config;
pub mod core;
pub mod data;
pub mod persistence;
pub mod rules;
pub mod simulation;
pub mod systems;

// Expose the game wrapper and types needed for interaction
pub use crate::components::Treat;
pub use crate::core::serialization::SaveState;
pub use crate::core::world::{CycleReport, Game, TrickOutcome};
