//! Game engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, the spatial grid, the enemy
//! registry, the wave scheduler, and the typing matcher. It processes
//! queued player commands at tick boundaries, runs all systems, and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wordstorm_core::commands::PlayerCommand;
use wordstorm_core::components::Word;
use wordstorm_core::config::{ConfigError, GameConfig};
use wordstorm_core::constants::{LONG_WORD_LEN, MAX_HEALTH, SCORE_PER_LETTER};
use wordstorm_core::enums::{GamePhase, WavePhase};
use wordstorm_core::events::GameEvent;
use wordstorm_core::state::GameStateSnapshot;
use wordstorm_core::types::{Position, SimTime};
use wordstorm_core::words::WordBank;

use crate::grid::SpatialGrid;
use crate::registry::EnemyRegistry;
use crate::scheduler::{FieldView, SpawnGroup, WaveScheduler, WaveTable};
use crate::systems;
use crate::typing::{KeyOutcome, TypingMatcher};
use crate::world_setup;

/// Configuration for starting a new game engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same game.
    pub seed: u64,
    pub config: GameConfig,
    pub table: WaveTable,
    pub bank: WordBank,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            config: GameConfig::default(),
            table: WaveTable::default(),
            bank: WordBank::default(),
        }
    }
}

/// Health and score tracked by the engine.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub health: u32,
    pub score: u32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            health: MAX_HEALTH,
            score: 0,
        }
    }
}

/// The game engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    grid: SpatialGrid,
    registry: EnemyRegistry,
    scheduler: WaveScheduler,
    matcher: TypingMatcher,
    player: PlayerState,
    target: Option<Entity>,
    time: SimTime,
    phase: GamePhase,
    config: GameConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Create a new engine. Fails only on invalid configuration.
    pub fn new(sim: SimConfig) -> Result<Self, ConfigError> {
        sim.config.validate()?;
        let grid = SpatialGrid::new(
            sim.config.grid_cell_size,
            sim.config.screen,
            sim.config.grid_padding,
        );
        let registry = EnemyRegistry::new(sim.config.pool_ceiling);
        let scheduler = WaveScheduler::new(sim.table, sim.bank, sim.config.clone());
        Ok(Self {
            world: World::new(),
            grid,
            registry,
            scheduler,
            matcher: TypingMatcher::new(),
            player: PlayerState::default(),
            target: None,
            time: SimTime::default(),
            phase: GamePhase::default(),
            config: sim.config,
            rng: ChaCha8Rng::seed_from_u64(sim.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.registry,
            &self.scheduler,
            &self.matcher,
            &self.player,
            self.target,
            &self.time,
            self.phase,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn registry(&self) -> &EnemyRegistry {
        &self.registry
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.start_game();
                }
            }
            PlayerCommand::Restart => {
                self.start_game();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::CharacterTyped { ch } => {
                if self.phase == GamePhase::Active {
                    self.handle_keystroke(ch);
                }
            }
            PlayerCommand::Backspace => {
                if self.phase == GamePhase::Active {
                    self.matcher.backspace();
                }
            }
            PlayerCommand::CycleTarget => {
                if self.phase == GamePhase::Active {
                    self.cycle_target();
                }
            }
            PlayerCommand::ConfirmWord => {
                if self.phase == GamePhase::Active {
                    if let Some(urgent) =
                        self.registry.find_most_urgent(&self.world, self.config.screen)
                    {
                        self.set_target(urgent);
                    }
                }
            }
        }
    }

    fn handle_keystroke(&mut self, ch: char) {
        // No target yet (or a stale one): lock onto the most urgent enemy
        // before consuming the keystroke.
        if self.target.map_or(true, |t| !self.registry.contains(t)) {
            match self.registry.find_most_urgent(&self.world, self.config.screen) {
                Some(urgent) => self.set_target(urgent),
                None => return,
            }
        }

        match self.matcher.on_char(ch) {
            KeyOutcome::Completed => self.complete_word(),
            KeyOutcome::Advanced | KeyOutcome::Rejected | KeyOutcome::NoTarget => {}
        }
    }

    /// The current target's word was fully typed.
    fn complete_word(&mut self) {
        let Some(entity) = self.target.take() else {
            return;
        };
        let word = self.matcher.target_word().unwrap_or_default().to_string();
        self.matcher.clear_target();

        let score_awarded = word.chars().count() as u32 * SCORE_PER_LETTER;
        self.player.score += score_awarded;
        self.events.push(GameEvent::WordCompleted {
            word: word.clone(),
            score_awarded,
        });
        tracing::debug!(%word, score_awarded, "word completed");

        let _ = self.registry.release(&mut self.world, entity, &mut self.grid);

        // Auto-target the survivor closest to escaping.
        if let Some(next) = self.registry.find_most_urgent(&self.world, self.config.screen) {
            self.set_target(next);
        }
    }

    /// Advance the target through the active set in activation order.
    fn cycle_target(&mut self) {
        let active = self.registry.active();
        if active.is_empty() {
            return;
        }
        let next = match self.target.and_then(|t| active.iter().position(|e| *e == t)) {
            Some(index) => active[(index + 1) % active.len()],
            None => active[0],
        };
        self.set_target(next);
    }

    /// Switch the typing target, resetting progress unconditionally.
    fn set_target(&mut self, entity: Entity) {
        let Ok(word) = self.world.get::<&Word>(entity) else {
            // Stale handle: drop the selection and self-heal next frame.
            self.target = None;
            self.matcher.clear_target();
            return;
        };
        let text = word.text.clone();
        drop(word);
        self.target = Some(entity);
        self.matcher.retarget(&text);
        self.events.push(GameEvent::TargetSwitched { word: text });
    }

    fn start_game(&mut self) {
        self.world.clear();
        self.grid.clear();
        self.registry.clear();
        self.scheduler.reset();
        self.matcher.clear_target();
        self.target = None;
        self.player = PlayerState::default();
        self.time = SimTime::default();
        self.events.clear();
        self.phase = GamePhase::Active;
        self.scheduler.start_wave(&mut self.events);
        tracing::info!("game started");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave scheduling and spawning
        let field = self.field_view();
        let group = self
            .scheduler
            .tick(self.time.dt(), &field, &mut self.rng, &mut self.events);
        if let Some(group) = group {
            self.spawn_group(group);
        }

        // 2. Flight integration + visibility + grid re-index
        systems::movement::run(&mut self.world, &mut self.grid, self.config.screen);

        // 3. Escapes: health penalties, target cleanup
        let escaped = systems::escape::run(
            &mut self.world,
            &mut self.registry,
            &mut self.grid,
            self.config.screen,
        );
        for (entity, word) in escaped {
            let penalty = wordstorm_core::constants::ESCAPE_HEALTH_PENALTY;
            self.player.health = self.player.health.saturating_sub(penalty);
            self.events.push(GameEvent::EnemyEscaped {
                word: word.clone(),
                health_penalty: penalty,
            });
            tracing::debug!(%word, health = self.player.health, "enemy escaped");
            if self.target == Some(entity) {
                self.target = None;
                self.matcher.clear_target();
            }
        }

        // 4. Stale-target self-heal
        if let Some(target) = self.target {
            if !self.registry.contains(target) {
                self.target = None;
                self.matcher.clear_target();
            }
        }

        // 5. Terminal states
        if self.player.health == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                final_score: self.player.score,
            });
            tracing::info!(score = self.player.score, "game over");
        } else if self.scheduler.phase() == WavePhase::Victory && self.registry.active_count() == 0
        {
            self.phase = GamePhase::Victory;
            self.events.push(GameEvent::Victory {
                final_score: self.player.score,
            });
            tracing::info!(score = self.player.score, "victory");
        }
    }

    fn field_view(&self) -> FieldView {
        let (active_words, long_word_count) = self.registry.active_words(&self.world, LONG_WORD_LEN);
        FieldView {
            active_count: self.registry.active_count() as u32,
            active_words,
            long_word_count,
        }
    }

    /// Turn a spawn directive into live enemies.
    fn spawn_group(&mut self, group: SpawnGroup) {
        for order in group.orders {
            let entity = self.registry.acquire(&mut self.world, order.species);
            let ok = world_setup::configure_live(
                &mut self.world,
                entity,
                order.word,
                order.y,
                order.speed,
                order.direction,
                self.config.screen,
            );
            if !ok {
                tracing::warn!(?entity, "discarding stale pooled enemy");
                continue;
            }
            let pos = Position::new(
                world_setup::start_x(order.direction, self.config.screen),
                order.y,
            );
            self.registry.activate(entity, &mut self.grid, pos);
        }

        // A fresh group with nothing selected: default to the enemy
        // nearest the screen center.
        if self.target.is_none() {
            if let Some(entity) = self
                .registry
                .find_nearest_to_center(&self.world, self.config.screen)
            {
                self.set_target(entity);
            }
        }
    }
}
