//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::{Entity, World};

use wordstorm_core::components::{Motion, Skin, VisState, Word};
use wordstorm_core::enums::{GamePhase, LetterState};
use wordstorm_core::events::GameEvent;
use wordstorm_core::state::{EnemyView, GameStateSnapshot, PlayerView, WaveView};
use wordstorm_core::types::{Position, SimTime};

use crate::engine::PlayerState;
use crate::registry::EnemyRegistry;
use crate::scheduler::WaveScheduler;
use crate::typing::TypingMatcher;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    registry: &EnemyRegistry,
    scheduler: &WaveScheduler,
    matcher: &TypingMatcher,
    player: &PlayerState,
    target: Option<Entity>,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        wave: WaveView {
            number: scheduler.wave_number(),
            phase: scheduler.phase(),
            remaining_budget: scheduler.remaining_budget(),
            active_enemies: registry.active_count() as u32,
        },
        player: PlayerView {
            health: player.health,
            score: player.score,
            input_buffer: matcher.typed().to_string(),
        },
        enemies: build_enemies(world, registry, matcher, target),
        target: target.map(Entity::to_bits).map(|b| b.get()),
        events,
    }
}

/// Build EnemyView list for every live enemy, sorted by id for
/// deterministic output.
fn build_enemies(
    world: &World,
    registry: &EnemyRegistry,
    matcher: &TypingMatcher,
    target: Option<Entity>,
) -> Vec<EnemyView> {
    let mut views: Vec<EnemyView> = registry
        .active()
        .iter()
        .filter_map(|&entity| {
            let pos = world.get::<&Position>(entity).ok()?;
            let skin = world.get::<&Skin>(entity).ok()?;
            let word = world.get::<&Word>(entity).ok()?;
            let motion = world.get::<&Motion>(entity).ok()?;
            let vis = world.get::<&VisState>(entity).ok()?;

            let is_target = target == Some(entity);
            let typed_len = if is_target { matcher.typed_len() } else { 0 };
            let letters = if is_target {
                matcher.letter_states()
            } else {
                vec![LetterState::Untyped; word.text.chars().count()]
            };

            Some(EnemyView {
                id: entity.to_bits().get(),
                species: skin.0,
                position: *pos,
                direction: motion.direction,
                speed: motion.speed,
                visibility: vis.visibility,
                word: word.text.clone(),
                typed_len,
                letters,
            })
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}
