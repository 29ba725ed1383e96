//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    /// Id of the current typing target, if any.
    pub target: Option<u64>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// One enemy as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    /// Stable external id (`hecs::Entity::to_bits`).
    pub id: u64,
    pub species: Species,
    pub position: Position,
    pub direction: MoveDirection,
    /// Pixels per second.
    pub speed: f32,
    pub visibility: Visibility,
    pub word: String,
    /// Correctly-typed prefix length; nonzero only for the target.
    pub typed_len: usize,
    /// Per-letter color states derived from `typed_len`.
    pub letters: Vec<LetterState>,
}

/// Player HUD state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub health: u32,
    pub score: u32,
    /// The current typed-prefix buffer.
    pub input_buffer: String,
}

/// Wave progress for the HUD banner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// 1-based wave number (0 before the first wave starts).
    pub number: u32,
    pub phase: WavePhase,
    /// Spawns left in the current wave's budget.
    pub remaining_budget: u32,
    pub active_enemies: u32,
}
