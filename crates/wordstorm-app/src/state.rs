//! Messages understood by the game-loop thread.

use wordstorm_core::commands::PlayerCommand;

/// Commands the frontend/driver can send to the game loop.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    /// Forward a player command to the engine.
    Player(PlayerCommand),
    /// Stop the loop thread.
    Shutdown,
}
