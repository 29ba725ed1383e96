//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in screen space (pixels, origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Screen dimensions the simulation runs against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self {
            width: crate::constants::SCREEN_WIDTH,
            height: crate::constants::SCREEN_HEIGHT,
        }
    }
}

/// Axis-aligned rectangle used for spatial grid queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The full-screen rectangle for the given bounds.
    pub fn screen(bounds: ScreenBounds) -> Self {
        Self::new(0.0, 0.0, bounds.width, bounds.height)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f32 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// A spawn group size that is provably positive and bounded.
///
/// Degenerate min/max wave configuration can produce a raw size of zero;
/// a zero-sized group would stall the wave scheduler forever, so the
/// constructor re-derives a floor of 1 instead of propagating the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSize(u32);

impl GroupSize {
    /// Clamp a raw size into `[1, max(1, ceiling)]`.
    pub fn clamped(raw: u32, ceiling: u32) -> Self {
        Self(raw.clamp(1, ceiling.max(1)))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}
