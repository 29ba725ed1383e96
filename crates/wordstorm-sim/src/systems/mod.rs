//! Per-tick simulation systems, run in a fixed order by the engine.

pub mod escape;
pub mod movement;
pub mod snapshot;
