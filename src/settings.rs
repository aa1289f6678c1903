//! Runner settings read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::core::GameConfig;
use crate::types::BULLET_STEP_MS;

pub const ENV_LEVEL: &str = "SHOOTRIS_LEVEL";
pub const ENV_SEED: &str = "SHOOTRIS_SEED";
pub const ENV_WIDTH: &str = "SHOOTRIS_WIDTH";
pub const ENV_HEIGHT: &str = "SHOOTRIS_HEIGHT";
pub const ENV_BULLET_MS: &str = "SHOOTRIS_BULLET_MS";
pub const ENV_LOG_FILE: &str = "SHOOTRIS_LOG_FILE";

const DEFAULT_LOG_FILE: &str = "shootris.log";

/// Everything the terminal runner needs before the first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub game: GameConfig,
    /// Interval between bullet steps.
    pub bullet_ms: u32,
    pub log_file: PathBuf,
}

impl Settings {
    /// Read settings from process environment variables.
    ///
    /// `random_seed` is used only when `SHOOTRIS_SEED` is unset.
    pub fn from_env(random_seed: u32) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), random_seed)
    }

    /// Read settings through `lookup`; blank values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        random_seed: u32,
    ) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut game = GameConfig::with_seed(random_seed);
        if let Some(level) = parse_var(ENV_LEVEL, var(ENV_LEVEL))? {
            game.level = level;
        }
        if let Some(seed) = parse_var(ENV_SEED, var(ENV_SEED))? {
            game.seed = seed;
        }
        if let Some(width) = parse_var(ENV_WIDTH, var(ENV_WIDTH))? {
            game.width = width;
        }
        if let Some(height) = parse_var(ENV_HEIGHT, var(ENV_HEIGHT))? {
            game.height = height;
        }
        // Keep the shooter on a narrowed grid.
        if game.shooter_start as usize >= game.width {
            game.shooter_start = (game.width / 2) as i32;
        }
        game.validate().context("invalid game configuration")?;

        let bullet_ms = parse_var(ENV_BULLET_MS, var(ENV_BULLET_MS))?
            .unwrap_or(BULLET_STEP_MS)
            .max(1);

        let log_file = var(ENV_LOG_FILE)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            game,
            bullet_ms,
            log_file,
        })
    }
}

fn parse_var<T>(key: &str, value: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("{key}={raw:?} is not a valid number"))
        })
        .transpose()
}
