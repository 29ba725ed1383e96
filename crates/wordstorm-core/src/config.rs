//! Game configuration passed into the engine at construction.
//!
//! Replaces the original's global/static tuning fields with an explicit
//! struct, so tests and concurrent game instances stay isolated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::ScreenBounds;

/// Validation failures for a [`GameConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid cell size must be positive, got {0}")]
    NonPositiveCellSize(f32),
    #[error("spawn band is empty: margins {top}+{bottom} exceed screen height {height}")]
    EmptySpawnBand { top: f32, bottom: f32, height: f32 },
    #[error("minimum vertical spacing must be positive, got {0}")]
    NonPositiveSpacing(f32),
    #[error("base enemy speed must be positive, got {0}")]
    NonPositiveSpeed(f32),
    #[error("speed increase factor must be in (0, 1], got {0}")]
    BadSpeedIncreaseFactor(f32),
}

/// Tuning parameters for one game instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub screen: ScreenBounds,
    pub spawn_margin_top: f32,
    pub spawn_margin_bottom: f32,
    pub grid_cell_size: f32,
    pub grid_padding: f32,
    pub min_vertical_spacing: f32,
    pub pool_ceiling: usize,
    pub announce_secs: f32,
    pub base_group_delay_secs: f32,
    pub speed_increase_factor: f32,
    pub base_enemy_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenBounds::default(),
            spawn_margin_top: SPAWN_MARGIN_TOP,
            spawn_margin_bottom: SPAWN_MARGIN_BOTTOM,
            grid_cell_size: GRID_CELL_SIZE,
            grid_padding: GRID_PADDING,
            min_vertical_spacing: MIN_VERTICAL_SPACING,
            pool_ceiling: POOL_CEILING,
            announce_secs: ANNOUNCE_DURATION_SECS,
            base_group_delay_secs: BASE_GROUP_DELAY_SECS,
            speed_increase_factor: SPEED_INCREASE_FACTOR,
            base_enemy_speed: BASE_ENEMY_SPEED,
        }
    }
}

impl GameConfig {
    /// Check the invariants the scheduler and grid rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_cell_size <= 0.0 {
            return Err(ConfigError::NonPositiveCellSize(self.grid_cell_size));
        }
        if self.spawn_band_height() <= 0.0 {
            return Err(ConfigError::EmptySpawnBand {
                top: self.spawn_margin_top,
                bottom: self.spawn_margin_bottom,
                height: self.screen.height,
            });
        }
        if self.min_vertical_spacing <= 0.0 {
            return Err(ConfigError::NonPositiveSpacing(self.min_vertical_spacing));
        }
        if self.base_enemy_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.base_enemy_speed));
        }
        if self.speed_increase_factor <= 0.0 || self.speed_increase_factor > 1.0 {
            return Err(ConfigError::BadSpeedIncreaseFactor(
                self.speed_increase_factor,
            ));
        }
        Ok(())
    }

    /// Vertical extent available for spawn placement.
    pub fn spawn_band_height(&self) -> f32 {
        self.screen.height - self.spawn_margin_top - self.spawn_margin_bottom
    }

    /// Largest group that fits the spawn band without visual crowding.
    pub fn space_constrained_max_group(&self) -> u32 {
        (self.spawn_band_height() / self.min_vertical_spacing).floor() as u32
    }
}
