//! Game configuration and its validation errors.

use thiserror::Error;

use crate::types::{DEFAULT_LEVEL, GRID_HEIGHT, GRID_WIDTH, QUEUE_LEN, SHOOTER_START_X};

/// Narrowest grid a spawned figure fits in (anchor column 3 + 4-wide box)
pub const MIN_WIDTH: usize = 7;

/// Shortest grid a spawned figure fits in (4-tall box)
pub const MIN_HEIGHT: usize = 4;

/// Widest grid accepted (the renderer draws 2 terminal columns per cell)
pub const MAX_WIDTH: usize = 100;

/// Tallest grid accepted
pub const MAX_HEIGHT: usize = 100;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width {0} is below the minimum of {min}", min = MIN_WIDTH)]
    WidthTooSmall(usize),

    #[error("grid height {0} is below the minimum of {min}", min = MIN_HEIGHT)]
    HeightTooSmall(usize),

    #[error("grid width {0} is above the maximum of {max}", max = MAX_WIDTH)]
    WidthTooLarge(usize),

    #[error("grid height {0} is above the maximum of {max}", max = MAX_HEIGHT)]
    HeightTooLarge(usize),

    #[error("level must be at least 1")]
    ZeroLevel,

    #[error("lookahead queue length must be at least 1")]
    EmptyQueue,

    #[error("shooter start column {x} is outside a grid {width} wide")]
    ShooterOutOfRange { x: i32, width: usize },

    #[error("grid is {actual:?} but the configuration expects {expected:?}")]
    GridMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

/// Everything a game needs to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed for the whole game; sets the gravity interval
    pub level: u32,
    pub seed: u32,
    pub queue_len: usize,
    pub shooter_start: i32,
}

impl GameConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_WIDTH {
            return Err(ConfigError::WidthTooSmall(self.width));
        }
        if self.height < MIN_HEIGHT {
            return Err(ConfigError::HeightTooSmall(self.height));
        }
        if self.width > MAX_WIDTH {
            return Err(ConfigError::WidthTooLarge(self.width));
        }
        if self.height > MAX_HEIGHT {
            return Err(ConfigError::HeightTooLarge(self.height));
        }
        if self.level == 0 {
            return Err(ConfigError::ZeroLevel);
        }
        if self.queue_len == 0 {
            return Err(ConfigError::EmptyQueue);
        }
        if self.shooter_start < 0 || self.shooter_start as usize >= self.width {
            return Err(ConfigError::ShooterOutOfRange {
                x: self.shooter_start,
                width: self.width,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            level: DEFAULT_LEVEL,
            seed: 1,
            queue_len: QUEUE_LEN,
            shooter_start: SHOOTER_START_X,
        }
    }
}
