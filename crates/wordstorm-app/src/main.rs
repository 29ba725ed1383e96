//! Headless WORDSTORM driver.
//!
//! Spawns the game loop, plays a short scripted session with an
//! auto-typist that always types the current target's word, logs domain
//! events, and prints the final snapshot as JSON.

mod game_loop;
mod state;

use std::sync::mpsc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use wordstorm_core::commands::PlayerCommand;
use wordstorm_core::enums::GamePhase;
use wordstorm_core::events::GameEvent;
use wordstorm_core::state::GameStateSnapshot;
use wordstorm_sim::engine::SimConfig;

use crate::state::GameLoopCommand;

/// How long the demo session runs before shutting down.
const SESSION_LIMIT: Duration = Duration::from_secs(30);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (snapshot_tx, snapshot_rx) = mpsc::channel::<GameStateSnapshot>();
    let cmd_tx = game_loop::spawn_game_loop(SimConfig::default(), snapshot_tx)?;

    cmd_tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))?;

    let started = std::time::Instant::now();
    let mut last_snapshot = None;

    for snapshot in snapshot_rx.iter() {
        for event in &snapshot.events {
            log_event(event);
        }

        // Auto-typist: push the next character of the target's word.
        if snapshot.phase == GamePhase::Active {
            if let Some(target_id) = snapshot.target {
                if let Some(enemy) = snapshot.enemies.iter().find(|e| e.id == target_id) {
                    if let Some(ch) = enemy.word.chars().nth(snapshot.player.input_buffer.len()) {
                        cmd_tx.send(GameLoopCommand::Player(PlayerCommand::CharacterTyped {
                            ch,
                        }))?;
                    }
                }
            }
        }

        let finished = matches!(snapshot.phase, GamePhase::GameOver | GamePhase::Victory);
        last_snapshot = Some(snapshot);
        if finished || started.elapsed() > SESSION_LIMIT {
            break;
        }
    }

    cmd_tx.send(GameLoopCommand::Shutdown)?;

    if let Some(snapshot) = last_snapshot {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::WaveAnnounced { wave } => tracing::info!(wave, "wave announced"),
        GameEvent::GroupSpawned { wave, count } => {
            tracing::info!(wave, count, "group spawned");
        }
        GameEvent::WordCompleted {
            word,
            score_awarded,
        } => tracing::info!(%word, score_awarded, "word completed"),
        GameEvent::EnemyEscaped {
            word,
            health_penalty,
        } => tracing::warn!(%word, health_penalty, "enemy escaped"),
        GameEvent::TargetSwitched { word } => tracing::debug!(%word, "target switched"),
        GameEvent::GameOver { final_score } => tracing::info!(final_score, "game over"),
        GameEvent::Victory { final_score } => tracing::info!(final_score, "victory"),
    }
}
