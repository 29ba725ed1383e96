//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Typing ---
    /// A printable character was typed.
    CharacterTyped { ch: char },
    /// Remove the last character of the input buffer.
    Backspace,

    // --- Targeting ---
    /// Cycle the typing target through the active enemies in order.
    CycleTarget,
    /// Lock onto the enemy closest to escaping (space-bar confirm).
    ConfirmWord,

    // --- Game control ---
    /// Start a new game from the main menu.
    StartGame,
    /// Restart from any terminal or running state.
    Restart,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
