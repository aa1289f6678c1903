//! Collision checking between a figure and the grid.

use crate::figure::Figure;
use crate::grid::Grid;

/// Whether `figure` is blocked at its current position
///
/// A cell blocks when it is past the bottom, past either side, or on an
/// occupied grid cell. Rows above the top are not checked: figures only move
/// down from row 0.
pub fn intersects(figure: &Figure, grid: &Grid) -> bool {
    let width = grid.width() as i32;
    let height = grid.height() as i32;

    figure
        .cells()
        .iter()
        .any(|&(x, y)| y >= height || x >= width || x < 0 || grid.is_occupied(x, y))
}
