//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{MoveDirection, Species, Visibility};

/// Marks an entity as an enemy (live or pooled).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Which skin this enemy renders with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Skin(pub Species);

/// The word the player must type to defeat this enemy.
/// Immutable while the enemy is live; cleared on release back to the pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
}

/// Horizontal motion state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Motion {
    pub direction: MoveDirection,
    /// Pixels per second, already scaled by the wave speed multiplier.
    pub speed: f32,
}

/// Visibility lifecycle state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VisState {
    pub visibility: Visibility,
    /// Latches once the enemy has ever been on-screen; only such enemies
    /// cost the player health on escape.
    pub was_visible: bool,
}

// Position (types.rs) is used directly as a component as well.
