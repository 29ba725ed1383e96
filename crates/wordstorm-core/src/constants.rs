//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Screen geometry ---

/// Default playfield width in pixels.
pub const SCREEN_WIDTH: f32 = 1280.0;

/// Default playfield height in pixels.
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Enemy sprite width in pixels (all skins share frame geometry).
pub const ENEMY_WIDTH: f32 = 128.0;

/// Enemy sprite height in pixels.
pub const ENEMY_HEIGHT: f32 = 128.0;

// --- Spatial grid ---

/// Grid cell edge length in pixels.
pub const GRID_CELL_SIZE: f32 = 160.0;

/// Margin beyond the screen inside which entities stay indexed.
/// Slightly more than one sprite, so approaching enemies are queryable
/// one cell before they become visible.
pub const GRID_PADDING: f32 = 192.0;

// --- Waves ---

/// Number of scripted waves before victory.
pub const MAX_WAVES: usize = 10;

/// Total spawn budget per wave.
pub const WAVE_SPAWNS: [u32; MAX_WAVES] = [5, 7, 9, 12, 14, 16, 19, 22, 25, 30];

/// Enemy speed multiplier per wave.
pub const WAVE_SPEED_MULT: [f32; MAX_WAVES] =
    [1.0, 1.05, 1.1, 1.2, 1.3, 1.4, 1.5, 1.65, 1.8, 2.0];

/// Minimum spawn-group size per wave.
pub const WAVE_MIN_GROUP: [u32; MAX_WAVES] = [1, 1, 1, 2, 2, 2, 2, 3, 3, 3];

/// Maximum spawn-group size per wave.
pub const WAVE_MAX_GROUP: [u32; MAX_WAVES] = [2, 2, 3, 3, 3, 4, 4, 4, 5, 5];

/// Inter-group delay multiplier per wave. Non-increasing: later waves
/// re-arm the group timer faster.
pub const WAVE_DELAY_MULT: [f32; MAX_WAVES] =
    [1.0, 1.0, 0.95, 0.95, 0.9, 0.9, 0.85, 0.85, 0.8, 0.75];

/// Word-tier weights (easy, medium, hard) per wave.
pub const WAVE_WORD_WEIGHTS: [(u32, u32, u32); MAX_WAVES] = [
    (8, 2, 0),
    (7, 3, 0),
    (6, 3, 1),
    (5, 4, 1),
    (4, 4, 2),
    (3, 5, 2),
    (3, 4, 3),
    (2, 4, 4),
    (2, 3, 5),
    (1, 3, 6),
];

/// Base delay between spawn groups (seconds, wave 1 first group).
pub const BASE_GROUP_DELAY_SECS: f32 = 6.0;

/// Compounding delay reduction applied after every emitted group.
pub const SPEED_INCREASE_FACTOR: f32 = 0.95;

/// Wave banner display time before spawning begins (seconds).
pub const ANNOUNCE_DURATION_SECS: f32 = 2.5;

/// Base horizontal enemy speed (pixels per second, wave multiplier 1.0).
pub const BASE_ENEMY_SPEED: f32 = 60.0;

// --- Spawn placement ---

/// Top of the vertical spawn band.
pub const SPAWN_MARGIN_TOP: f32 = 80.0;

/// Gap kept above the bottom edge (HUD strip).
pub const SPAWN_MARGIN_BOTTOM: f32 = 120.0;

/// Minimum vertical spacing between enemies of one group.
/// The 0.3 factor is tuned empirically for visual balance.
pub const MIN_VERTICAL_SPACING: f32 = ENEMY_HEIGHT * 0.3;

// --- Words ---

/// Words at or above this length count as "long".
pub const LONG_WORD_LEN: usize = 8;

/// At most this many long words may be live at once.
pub const MAX_ACTIVE_LONG_WORDS: usize = 2;

// --- Player ---

/// Starting and maximum health.
pub const MAX_HEALTH: u32 = 100;

/// Health lost when a visible enemy escapes.
pub const ESCAPE_HEALTH_PENALTY: u32 = 10;

/// Score awarded per letter of a completed word.
pub const SCORE_PER_LETTER: u32 = 10;

// --- Object pool ---

/// Released enemies kept for reuse, per species; beyond this they are
/// despawned outright.
pub const POOL_CEILING: usize = 10;
