//! Game loop thread — runs the engine at the fixed tick rate.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via one `mpsc` channel; snapshots are
//! published on another. This is the only hand-off between the input
//! producer and the single simulation thread; the engine itself never
//! sees another thread.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use wordstorm_core::constants::TICK_RATE;
use wordstorm_core::state::GameStateSnapshot;
use wordstorm_sim::engine::{GameEngine, SimConfig};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the driver to use. The thread exits on
/// `Shutdown`, on command-channel disconnect, or when the snapshot
/// receiver goes away.
pub fn spawn_game_loop(
    sim: SimConfig,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
) -> std::io::Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let engine = GameEngine::new(sim)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    std::thread::Builder::new()
        .name("wordstorm-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, snapshot_tx);
        })?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: GameEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Publish; a dropped receiver means the frontend is gone
        if snapshot_tx.send(snapshot).is_err() {
            return;
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else {
            // Fell behind; re-anchor rather than trying to catch up.
            next_tick_time = now;
        }
    }
}
