//! Simulation engine for WORDSTORM.
//!
//! Owns the hecs ECS world, the spatial grid, the enemy pool, the wave
//! scheduler, and the typing matcher; runs systems at a fixed tick rate
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod grid;
pub mod registry;
pub mod scheduler;
pub mod systems;
pub mod typing;
pub mod world_setup;

pub use engine::GameEngine;
pub use wordstorm_core as core;

#[cfg(test)]
mod tests;
