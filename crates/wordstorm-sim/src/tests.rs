//! Tests for the game engine: determinism, spawning, typing, escapes,
//! and terminal states.

use wordstorm_core::commands::PlayerCommand;
use wordstorm_core::config::GameConfig;
use wordstorm_core::enums::GamePhase;
use wordstorm_core::events::GameEvent;
use wordstorm_core::state::GameStateSnapshot;
use wordstorm_core::words::WordBank;

use crate::engine::{GameEngine, SimConfig};
use crate::scheduler::WaveTable;

fn engine(seed: u64) -> GameEngine {
    GameEngine::new(SimConfig {
        seed,
        ..Default::default()
    })
    .unwrap()
}

/// One wave, one spawn, no announcement delay. The only easy word is
/// "cat", and the weights force the easy tier, so the word is known.
fn tiny_sim(spawns: u32, group: u32, speed: f32) -> GameEngine {
    let config = GameConfig {
        announce_secs: 0.0,
        base_enemy_speed: speed,
        ..Default::default()
    };
    let table = WaveTable {
        spawns: vec![spawns],
        speed_mult: vec![1.0],
        min_group: vec![group],
        max_group: vec![group],
        delay_mult: vec![1.0],
        word_weights: vec![(1, 0, 0)],
    };
    // A single easy word makes the first spawn's word predictable; larger
    // groups fall back through the picker's unconditional tier.
    let bank = WordBank {
        easy: vec!["cat".into()],
        medium: vec!["wizard".into()],
        hard: vec!["gargoyle".into()],
    };
    GameEngine::new(SimConfig {
        seed: 1,
        config,
        table,
        bank,
    })
    .unwrap()
}

fn tick_until<F: Fn(&GameStateSnapshot) -> bool>(
    engine: &mut GameEngine,
    max_ticks: usize,
    pred: F,
) -> GameStateSnapshot {
    for _ in 0..max_ticks {
        let snap = engine.tick();
        if pred(&snap) {
            return snap;
        }
    }
    panic!("predicate not satisfied within {max_ticks} ticks");
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = engine(12345);
    let mut engine_b = engine(12345);

    engine_a.queue_command(PlayerCommand::StartGame);
    engine_b.queue_command(PlayerCommand::StartGame);

    for _ in 0..600 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = engine(111);
    let mut engine_b = engine(222);

    engine_a.queue_command(PlayerCommand::StartGame);
    engine_b.queue_command(PlayerCommand::StartGame);

    // Group sizes, spawn rows, and words all roll from the seed, so the
    // streams diverge once the first wave starts spawning.
    let mut diverged = false;
    for _ in 0..2_000 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();
        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Game start and spawning ----

#[test]
fn test_start_game_announces_wave_one() {
    let mut engine = engine(7);
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::WaveAnnounced { wave: 1 })));
}

#[test]
fn test_commands_before_start_are_ignored() {
    let mut engine = engine(7);
    engine.queue_command(PlayerCommand::CharacterTyped { ch: 'a' });
    engine.queue_command(PlayerCommand::Pause);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::MainMenu);
    assert_eq!(snap.time.tick, 0);
}

#[test]
fn test_first_group_spawns_and_auto_targets() {
    let mut engine = tiny_sim(1, 1, 60.0);
    engine.queue_command(PlayerCommand::StartGame);
    let snap = tick_until(&mut engine, 100, |s| !s.enemies.is_empty());
    assert_eq!(snap.enemies.len(), 1);
    assert_eq!(snap.enemies[0].word, "cat");
    assert_eq!(snap.target, Some(snap.enemies[0].id));
    assert_eq!(snap.wave.remaining_budget, 0);
}

#[test]
fn test_pause_freezes_time_and_resume_continues() {
    let mut engine = engine(3);
    engine.queue_command(PlayerCommand::StartGame);
    for _ in 0..10 {
        let _ = engine.tick();
    }
    engine.queue_command(PlayerCommand::Pause);
    let paused = engine.tick();
    let frozen_tick = paused.time.tick;
    for _ in 0..10 {
        assert_eq!(engine.tick().time.tick, frozen_tick);
    }
    engine.queue_command(PlayerCommand::Resume);
    let _ = engine.tick();
    assert!(engine.time().tick > frozen_tick);
}

// ---- Typing through the engine ----

#[test]
fn test_typing_a_word_defeats_the_enemy_and_scores() {
    let mut engine = tiny_sim(1, 1, 60.0);
    engine.queue_command(PlayerCommand::StartGame);
    let _ = tick_until(&mut engine, 100, |s| !s.enemies.is_empty());

    for ch in "cat".chars() {
        engine.queue_command(PlayerCommand::CharacterTyped { ch });
    }
    let snap = engine.tick();
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::WordCompleted { score_awarded: 30, .. })));
    assert_eq!(snap.player.score, 30);
    assert!(snap.enemies.is_empty());
    assert!(snap.target.is_none());
}

#[test]
fn test_wrong_char_clears_the_input_buffer() {
    let mut engine = tiny_sim(1, 1, 60.0);
    engine.queue_command(PlayerCommand::StartGame);
    let _ = tick_until(&mut engine, 100, |s| !s.enemies.is_empty());

    engine.queue_command(PlayerCommand::CharacterTyped { ch: 'c' });
    let snap = engine.tick();
    assert_eq!(snap.player.input_buffer, "c");
    assert_eq!(snap.enemies[0].typed_len, 1);

    engine.queue_command(PlayerCommand::CharacterTyped { ch: 'x' });
    let snap = engine.tick();
    assert_eq!(snap.player.input_buffer, "");
    assert_eq!(snap.enemies[0].typed_len, 0);
}

#[test]
fn test_backspace_pops_one_char() {
    let mut engine = tiny_sim(1, 1, 60.0);
    engine.queue_command(PlayerCommand::StartGame);
    let _ = tick_until(&mut engine, 100, |s| !s.enemies.is_empty());

    engine.queue_command(PlayerCommand::CharacterTyped { ch: 'c' });
    engine.queue_command(PlayerCommand::CharacterTyped { ch: 'a' });
    engine.queue_command(PlayerCommand::Backspace);
    let snap = engine.tick();
    assert_eq!(snap.player.input_buffer, "c");
}

#[test]
fn test_cycle_target_resets_progress() {
    let mut engine = tiny_sim(2, 2, 60.0);
    engine.queue_command(PlayerCommand::StartGame);
    let snap = tick_until(&mut engine, 200, |s| s.enemies.len() == 2);
    let first_target = snap.target.unwrap();

    engine.queue_command(PlayerCommand::CharacterTyped {
        ch: snap
            .enemies
            .iter()
            .find(|e| e.id == first_target)
            .unwrap()
            .word
            .chars()
            .next()
            .unwrap(),
    });
    engine.queue_command(PlayerCommand::CycleTarget);
    let snap = engine.tick();
    assert_ne!(snap.target, Some(first_target));
    assert_eq!(snap.player.input_buffer, "", "switching target must reset");
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::TargetSwitched { .. })));
}

// ---- Escapes and terminal states ----

#[test]
fn test_escape_costs_health_and_recycles_the_enemy() {
    // Fast enough to cross in a handful of ticks, slow enough to be seen.
    let mut engine = tiny_sim(1, 1, 42_000.0);
    engine.queue_command(PlayerCommand::StartGame);
    let snap = tick_until(&mut engine, 200, |s| {
        s.events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyEscaped { .. }))
    });
    assert_eq!(snap.player.health, 90);
    assert!(snap.enemies.is_empty());
    assert!(snap.target.is_none());
}

#[test]
fn test_ten_escapes_end_the_game() {
    let mut engine = tiny_sim(10, 10, 42_000.0);
    engine.queue_command(PlayerCommand::StartGame);
    let snap = tick_until(&mut engine, 500, |s| s.phase == GamePhase::GameOver);
    assert_eq!(snap.player.health, 0);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::GameOver { .. })));
}

#[test]
fn test_no_spawns_after_game_over() {
    let mut engine = tiny_sim(10, 10, 42_000.0);
    engine.queue_command(PlayerCommand::StartGame);
    let _ = tick_until(&mut engine, 500, |s| s.phase == GamePhase::GameOver);
    for _ in 0..100 {
        let snap = engine.tick();
        assert!(snap.enemies.is_empty());
        assert_eq!(snap.time.tick, engine.time().tick, "time must be frozen");
    }
}

#[test]
fn test_clearing_the_last_wave_is_victory() {
    let mut engine = tiny_sim(1, 1, 60.0);
    engine.queue_command(PlayerCommand::StartGame);
    let _ = tick_until(&mut engine, 100, |s| !s.enemies.is_empty());
    for ch in "cat".chars() {
        engine.queue_command(PlayerCommand::CharacterTyped { ch });
    }
    let snap = tick_until(&mut engine, 100, |s| s.phase == GamePhase::Victory);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::Victory { final_score: 30 })));
}

#[test]
fn test_restart_resets_everything() {
    let mut engine = tiny_sim(1, 1, 42_000.0);
    engine.queue_command(PlayerCommand::StartGame);
    let _ = tick_until(&mut engine, 200, |s| s.player.health < 100);

    engine.queue_command(PlayerCommand::Restart);
    let snap = engine.tick();
    assert_eq!(snap.player.health, 100);
    assert_eq!(snap.player.score, 0);
    assert_eq!(snap.time.tick, 1);
    assert!(snap.enemies.is_empty());
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::WaveAnnounced { wave: 1 })));
}

#[test]
fn test_confirm_word_locks_the_most_urgent_enemy() {
    let mut engine = tiny_sim(2, 2, 60.0);
    engine.queue_command(PlayerCommand::StartGame);
    let _ = tick_until(&mut engine, 200, |s| s.enemies.len() == 2);
    // Let them fly a while so edge distances differ meaningfully.
    for _ in 0..60 {
        let _ = engine.tick();
    }
    engine.queue_command(PlayerCommand::ConfirmWord);
    let snap = engine.tick();
    // Both enemies move the same direction at the same speed, so the
    // most urgent is simply the leader; assert a valid selection exists.
    assert!(snap.target.is_some());
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::TargetSwitched { .. })));
}
