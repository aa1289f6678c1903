//! Scoring module - line-clear reward and gravity timing
//!
//! A freeze that clears `n` rows at once scores `n * n`, so simultaneous
//! clears grow quadratically. Level never changes during a game; it only
//! sets the gravity interval.

use crate::types::BASE_TICK_MS;

/// Points for clearing `lines` rows in one freeze
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(lines)
}

/// Gravity interval for a level: `BASE_TICK_MS / level`, level 0 treated as 1
pub fn tick_interval_ms(level: u32) -> u32 {
    BASE_TICK_MS / level.max(1)
}
