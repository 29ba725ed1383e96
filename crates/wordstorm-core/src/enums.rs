//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy species. Same behavior, different skin — variants are data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    #[default]
    Gargoyle,
    Grimouge,
    Vyleye,
}

impl Species {
    /// All species, in spawn-rotation order.
    pub const ALL: [Species; 3] = [Species::Gargoyle, Species::Grimouge, Species::Vyleye];

    /// Skin descriptor consumed by the renderer.
    pub fn skin(self) -> SkinDescriptor {
        match self {
            Species::Gargoyle => SkinDescriptor {
                sheet: "gargoyle_fly",
                frame_width: 128,
                frame_height: 128,
                frames: 5,
            },
            Species::Grimouge => SkinDescriptor {
                sheet: "grimouge_fly",
                frame_width: 128,
                frame_height: 128,
                frames: 6,
            },
            Species::Vyleye => SkinDescriptor {
                sheet: "vyleye_fly",
                frame_width: 128,
                frame_height: 128,
                frames: 4,
            },
        }
    }
}

/// Sprite-sheet geometry for one enemy skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkinDescriptor {
    pub sheet: &'static str,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frames: u32,
}

/// Horizontal travel direction across the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl MoveDirection {
    /// Signed unit factor applied to speed when integrating x.
    pub fn sign(self) -> f32 {
        match self {
            MoveDirection::LeftToRight => 1.0,
            MoveDirection::RightToLeft => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            MoveDirection::LeftToRight => MoveDirection::RightToLeft,
            MoveDirection::RightToLeft => MoveDirection::LeftToRight,
        }
    }
}

/// Per-enemy visibility lifecycle.
///
/// Enemies spawn off-screen and only become eligible for escape penalties
/// once the player has actually had a chance to see them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Spawned off-screen, approaching the visible area.
    #[default]
    Approaching,
    /// Partially on-screen.
    Visible,
    /// Fully on-screen; moves, can escape, can be targeted.
    Active,
}

/// Wave scheduler state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// No wave running.
    #[default]
    Idle,
    /// Wave announced, spawn gate counting down.
    Announcing,
    /// Emitting spawn groups until the budget is exhausted.
    Spawning,
    /// Budget spent and field cleared; about to advance.
    WaveComplete,
    /// All waves cleared. Terminal — no further groups are emitted.
    Victory,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
    Victory,
}

/// Word difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Per-letter typed state exposed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterState {
    Untyped,
    Typed,
}
