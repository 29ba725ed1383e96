//! Wave scheduler — decides when and where enemy groups spawn.
//!
//! Holds the per-wave difficulty tables and a small state machine:
//!
//! ```text
//! Idle -(start_wave)-> Announcing -(timer)-> Spawning
//! Spawning -(group timer elapsed OR field empty, budget > 0)-> emit group
//! Spawning -(budget == 0 AND field empty)-> WaveComplete -> next wave,
//!                                           or Victory past the last wave
//! ```
//!
//! The scheduler never touches the ECS world; it emits [`SpawnGroup`]
//! directives the engine turns into live enemies.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use wordstorm_core::config::GameConfig;
use wordstorm_core::constants::*;
use wordstorm_core::enums::{Difficulty, MoveDirection, Species, WavePhase};
use wordstorm_core::events::GameEvent;
use wordstorm_core::types::GroupSize;
use wordstorm_core::words::WordBank;

/// Static per-wave difficulty tables.
///
/// Monotonicity (spawns/speed/groups non-decreasing, delay non-increasing)
/// is a property of the built-in tables, checked by test, not enforced at
/// runtime — custom tables are the caller's responsibility.
#[derive(Debug, Clone)]
pub struct WaveTable {
    pub spawns: Vec<u32>,
    pub speed_mult: Vec<f32>,
    pub min_group: Vec<u32>,
    pub max_group: Vec<u32>,
    pub delay_mult: Vec<f32>,
    /// (easy, medium, hard) word-tier weights.
    pub word_weights: Vec<(u32, u32, u32)>,
}

impl Default for WaveTable {
    fn default() -> Self {
        Self {
            spawns: WAVE_SPAWNS.to_vec(),
            speed_mult: WAVE_SPEED_MULT.to_vec(),
            min_group: WAVE_MIN_GROUP.to_vec(),
            max_group: WAVE_MAX_GROUP.to_vec(),
            delay_mult: WAVE_DELAY_MULT.to_vec(),
            word_weights: WAVE_WORD_WEIGHTS.to_vec(),
        }
    }
}

impl WaveTable {
    pub fn wave_count(&self) -> usize {
        self.spawns.len()
    }
}

/// One enemy to spawn, fully specified except for its entity handle.
#[derive(Debug, Clone)]
pub struct SpawnOrder {
    pub species: Species,
    pub word: String,
    pub y: f32,
    pub speed: f32,
    pub direction: MoveDirection,
}

/// A batch of spawn orders emitted together.
#[derive(Debug, Clone)]
pub struct SpawnGroup {
    /// 1-based wave number.
    pub wave: u32,
    pub orders: Vec<SpawnOrder>,
}

/// Field state the scheduler needs from the registry each tick.
#[derive(Debug, Clone, Default)]
pub struct FieldView {
    pub active_count: u32,
    /// Words currently assigned to live enemies.
    pub active_words: Vec<String>,
    /// How many live words are "long" (len >= LONG_WORD_LEN).
    pub long_word_count: usize,
}

/// The wave scheduler state machine.
#[derive(Debug)]
pub struct WaveScheduler {
    table: WaveTable,
    bank: WordBank,
    config: GameConfig,

    phase: WavePhase,
    /// 0-based index into the tables.
    wave_index: usize,
    remaining_budget: u32,
    announce_remaining: f32,
    /// Current inter-group delay; compounds down within a wave.
    group_delay: f32,
    group_timer: f32,
    /// Groups emitted in the current wave; drives species/edge rotation.
    group_counter: u32,
}

impl WaveScheduler {
    pub fn new(table: WaveTable, bank: WordBank, config: GameConfig) -> Self {
        Self {
            table,
            bank,
            config,
            phase: WavePhase::Idle,
            wave_index: 0,
            remaining_budget: 0,
            announce_remaining: 0.0,
            group_delay: 0.0,
            group_timer: 0.0,
            group_counter: 0,
        }
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    /// 1-based wave number; 0 while idle.
    pub fn wave_number(&self) -> u32 {
        match self.phase {
            WavePhase::Idle => 0,
            _ => self.wave_index as u32 + 1,
        }
    }

    pub fn remaining_budget(&self) -> u32 {
        self.remaining_budget
    }

    /// Begin wave 1 from idle. Later waves advance internally.
    pub fn start_wave(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase != WavePhase::Idle {
            return;
        }
        self.wave_index = 0;
        self.enter_wave(events);
    }

    /// Back to idle (game reset).
    pub fn reset(&mut self) {
        self.phase = WavePhase::Idle;
        self.wave_index = 0;
        self.remaining_budget = 0;
        self.group_counter = 0;
    }

    /// Advance one tick. Returns a spawn group when one is due.
    pub fn tick(
        &mut self,
        dt: f32,
        field: &FieldView,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) -> Option<SpawnGroup> {
        match self.phase {
            WavePhase::Idle | WavePhase::Victory => None,
            WavePhase::Announcing => {
                self.announce_remaining -= dt;
                if self.announce_remaining <= 0.0 {
                    self.phase = WavePhase::Spawning;
                    // First group of a wave goes out immediately.
                    self.group_timer = 0.0;
                }
                None
            }
            WavePhase::Spawning => {
                if self.remaining_budget == 0 {
                    if field.active_count == 0 {
                        self.phase = WavePhase::WaveComplete;
                        tracing::debug!(wave = self.wave_number(), "wave complete");
                    }
                    return None;
                }
                self.group_timer -= dt;
                if self.group_timer <= 0.0 || field.active_count == 0 {
                    return Some(self.emit_group(field, rng, events));
                }
                None
            }
            WavePhase::WaveComplete => {
                self.wave_index += 1;
                if self.wave_index >= self.table.wave_count() {
                    self.phase = WavePhase::Victory;
                } else {
                    self.enter_wave(events);
                }
                None
            }
        }
    }

    fn enter_wave(&mut self, events: &mut Vec<GameEvent>) {
        self.phase = WavePhase::Announcing;
        self.remaining_budget = self.table.spawns[self.wave_index];
        self.announce_remaining = self.config.announce_secs;
        self.group_delay =
            self.config.base_group_delay_secs * self.table.delay_mult[self.wave_index];
        self.group_timer = 0.0;
        self.group_counter = 0;
        events.push(GameEvent::WaveAnnounced {
            wave: self.wave_number(),
        });
        tracing::debug!(
            wave = self.wave_number(),
            budget = self.remaining_budget,
            "wave announced"
        );
    }

    fn emit_group(
        &mut self,
        field: &FieldView,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) -> SpawnGroup {
        let w = self.wave_index;
        let raw = rng.gen_range(self.table.min_group[w]..=self.table.max_group[w]);
        // Crowding cap, then the remaining budget; GroupSize floors at 1.
        let size = GroupSize::clamped(raw, self.config.space_constrained_max_group())
            .get()
            .min(self.remaining_budget);

        // Vertical placements, sorted ascending. Cosmetic ordering only.
        let band_min = self.config.spawn_margin_top;
        let band_max = self.config.screen.height - self.config.spawn_margin_bottom;
        let mut ys: Vec<f32> = (0..size).map(|_| rng.gen_range(band_min..band_max)).collect();
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        // Species and entry edge rotate per group within the wave.
        let species = Species::ALL[self.group_counter as usize % Species::ALL.len()];
        let direction = if self.group_counter % 2 == 0 {
            MoveDirection::LeftToRight
        } else {
            MoveDirection::RightToLeft
        };
        let speed = self.config.base_enemy_speed * self.table.speed_mult[w];

        let mut used: Vec<String> = field.active_words.clone();
        let mut long_count = field.long_word_count;
        let orders = ys
            .into_iter()
            .map(|y| {
                let word = self.choose_word(rng, &used, long_count);
                if word.len() >= LONG_WORD_LEN {
                    long_count += 1;
                }
                used.push(word.clone());
                SpawnOrder {
                    species,
                    word,
                    y,
                    speed,
                    direction,
                }
            })
            .collect();

        self.remaining_budget -= size;
        self.group_counter += 1;
        // Compounding intra-wave acceleration.
        self.group_delay *= self.config.speed_increase_factor * self.table.delay_mult[w];
        self.group_timer = self.group_delay;

        events.push(GameEvent::GroupSpawned {
            wave: self.wave_number(),
            count: size,
        });
        tracing::debug!(
            wave = self.wave_number(),
            size,
            remaining = self.remaining_budget,
            "spawn group emitted"
        );

        SpawnGroup {
            wave: self.wave_number(),
            orders,
        }
    }

    /// Pick a word for one enemy.
    ///
    /// Tier chosen by the wave's weights; candidates skip words already
    /// live and refuse a third simultaneous long word. An emptied pool
    /// falls back to unused easy words, then to any word at all.
    fn choose_word(&self, rng: &mut ChaCha8Rng, used: &[String], long_count: usize) -> String {
        let tier = self.roll_tier(rng);
        let is_used = |w: &str| used.iter().any(|u| u.as_str() == w);

        let candidates: Vec<&String> = self
            .bank
            .tier(tier)
            .iter()
            .filter(|w| {
                !is_used(w.as_str())
                    && (w.len() < LONG_WORD_LEN || long_count < MAX_ACTIVE_LONG_WORDS)
            })
            .collect();
        if let Some(word) = pick(rng, &candidates) {
            return word.clone();
        }

        let easy: Vec<&String> = self
            .bank
            .tier(Difficulty::Easy)
            .iter()
            .filter(|w| !is_used(w.as_str()))
            .collect();
        if let Some(word) = pick(rng, &easy) {
            return word.clone();
        }

        // Everything is taken; duplicates beat stalling the spawner.
        let all: Vec<&String> = self.bank.all().collect();
        pick(rng, &all).cloned().unwrap_or_else(|| "rune".to_string())
    }

    fn roll_tier(&self, rng: &mut ChaCha8Rng) -> Difficulty {
        let (e, m, h) = self.table.word_weights[self.wave_index];
        let total = (e + m + h).max(1);
        let roll = rng.gen_range(0..total);
        if roll < e {
            Difficulty::Easy
        } else if roll < e + m {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }
}

fn pick<'a>(rng: &mut ChaCha8Rng, items: &[&'a String]) -> Option<&'a String> {
    if items.is_empty() {
        None
    } else {
        Some(items[rng.gen_range(0..items.len())])
    }
}
