//! Bullets module - single-cell projectiles fired from the shooter
//!
//! Bullets start on row 0 at the shooter column and fall one row per step.
//! A bullet that lands on an occupied cell erases it and is spent; one that
//! falls past the bottom row disappears.

use crate::grid::Grid;
use crate::types::EMPTY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
}

impl Bullet {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Advance every bullet one row and resolve impacts
///
/// Bullets are processed in firing order, so a later bullet in the same
/// column sees cells erased by an earlier one in the same step. Returns the
/// number of cells erased.
pub fn step_bullets(bullets: &mut Vec<Bullet>, grid: &mut Grid) -> u32 {
    let height = grid.height() as i32;
    let mut erased = 0;

    bullets.retain_mut(|bullet| {
        bullet.y += 1;
        if bullet.y >= height {
            return false;
        }
        if grid.is_occupied(bullet.x, bullet.y) {
            grid.set(bullet.x, bullet.y, EMPTY);
            erased += 1;
            tracing::debug!(x = bullet.x, y = bullet.y, "bullet erased cell");
            return false;
        }
        true
    });

    erased
}
