//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Domain events drained into each snapshot for the frontend collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave has been announced (banner + horn cue).
    WaveAnnounced { wave: u32 },
    /// A spawn group was emitted.
    GroupSpawned { wave: u32, count: u32 },
    /// The player finished typing a word; its enemy is defeated.
    WordCompleted { word: String, score_awarded: u32 },
    /// An enemy crossed its exit edge while visible.
    EnemyEscaped { word: String, health_penalty: u32 },
    /// The typing target changed (cycle, confirm, or auto-select).
    TargetSwitched { word: String },
    /// Health reached zero.
    GameOver { final_score: u32 },
    /// All waves cleared.
    Victory { final_score: u32 },
}
