//! Word banks per difficulty tier.
//!
//! The bank is passed into the wave scheduler at construction; tests can
//! substitute a tiny bank to make assignment deterministic.

use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;

/// Built-in easy tier (short, common).
pub const EASY_WORDS: &[&str] = &[
    "bat", "cat", "orb", "rune", "mist", "bone", "claw", "wing", "fang", "hex", "imp", "owl",
    "moon", "ghost", "witch", "storm", "crypt", "raven", "skull", "torch",
];

/// Built-in medium tier.
pub const MEDIUM_WORDS: &[&str] = &[
    "wizard", "goblin", "potion", "shadow", "spirit", "dragon", "casket", "lantern", "phantom",
    "vampire", "serpent", "cauldron", "gremlin", "specter", "banshee", "wraith",
];

/// Built-in hard tier (length >= 8 counts as "long").
pub const HARD_WORDS: &[&str] = &[
    "gargoyle", "sorcery", "alchemist", "talisman", "nocturnal", "macabre", "pestilence",
    "necromancer", "apparition", "incantation", "malevolent", "labyrinth",
];

/// The word pools one game instance draws from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordBank {
    pub easy: Vec<String>,
    pub medium: Vec<String>,
    pub hard: Vec<String>,
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            easy: EASY_WORDS.iter().map(|w| w.to_string()).collect(),
            medium: MEDIUM_WORDS.iter().map(|w| w.to_string()).collect(),
            hard: HARD_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl WordBank {
    pub fn tier(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Every word in the bank, easiest tier first.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.easy.iter().chain(&self.medium).chain(&self.hard)
    }
}
