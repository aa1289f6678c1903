//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (3, 0), the top-left corner of a figure's 4x4 box
//!
//! # Timing
//!
//! The gravity tick fires every `BASE_TICK_MS / level` milliseconds. Level is
//! fixed for a game (it does not grow with cleared lines).
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 1000 | Gravity interval numerator |
//! | `DEFAULT_LEVEL` | 2 | Starting level (500ms per row) |
//! | `BULLET_STEP_MS` | 50 | Default bullet clock |
//!
//! # Examples
//!
//! ```
//! use shootris_types::{PieceKind, GRID_WIDTH, GRID_HEIGHT};
//!
//! let kind = PieceKind::from_index(3).unwrap();
//! assert_eq!(kind, PieceKind::O);
//! assert_eq!(kind.color(), 4);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Default grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Default grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Spawn anchor (x, y) for every new or swapped-in figure
pub const SPAWN_ANCHOR: (i32, i32) = (3, 0);

/// Length of the lookahead queue
pub const QUEUE_LEN: usize = 5;

/// Starting level
pub const DEFAULT_LEVEL: u32 = 2;

/// Starting shooter column
pub const SHOOTER_START_X: i32 = 5;

/// Gravity interval numerator: one row every `BASE_TICK_MS / level` ms
pub const BASE_TICK_MS: u32 = 1000;

/// Default interval between bullet steps
pub const BULLET_STEP_MS: u32 = 50;

/// Side length of the bounding box every rotation state lives in
pub const BOX_SIZE: u8 = 4;

/// DAS (Delayed Auto Shift) delay in milliseconds.
pub const DEFAULT_DAS_MS: u32 = 150;

/// ARR (Auto Repeat Rate) in milliseconds.
pub const DEFAULT_ARR_MS: u32 = 50;

/// Soft drop DAS in milliseconds.
pub const SOFT_DROP_DAS_MS: u32 = 0;

/// Soft drop ARR in milliseconds.
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// A grid cell: `0` is empty, `1..=7` is the color of the kind that filled it.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_gives_half_second_gravity() {
        assert_eq!(BASE_TICK_MS / DEFAULT_LEVEL, 500);
    }

    #[test]
    fn shooter_starts_inside_default_grid() {
        assert!((SHOOTER_START_X as usize) < GRID_WIDTH);
    }

    #[test]
    fn piece_kind_index_roundtrip() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), Some(*kind));
            assert_eq!(PieceKind::from_color(kind.color()), Some(*kind));
        }
        assert_eq!(PieceKind::from_index(7), None);
        assert_eq!(PieceKind::from_color(EMPTY), None);
    }
}

/// The seven piece kinds, in catalog order
///
/// The discriminant is the catalog index; the grid color is `index + 1`:
/// - **I** (1): Cyan, bar
/// - **J** (2): Blue
/// - **L** (3): Orange
/// - **O** (4): Yellow, 2x2 square
/// - **S** (5): Green
/// - **T** (6): Purple
/// - **Z** (7): Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Catalog index (0..=6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Grid color written on freeze (1..=7)
    pub fn color(self) -> Cell {
        self as u8 + 1
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Map a grid cell back to the kind that filled it
    ///
    /// # Examples
    ///
    /// ```
    /// use shootris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_color(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_color(7), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_color(0), None);
    /// ```
    pub fn from_color(color: Cell) -> Option<Self> {
        (color as usize).checked_sub(1).and_then(Self::from_index)
    }

    /// Uppercase letter used by the side panel
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Lifecycle of a game
///
/// `GameOver` is terminal; only a reset returns to `Running`. Pause is an
/// orthogonal flag and not a run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Running,
    GameOver,
}

/// Discrete commands the input adapter forwards into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move figure one cell left
    MoveLeft,
    /// Move figure one cell right
    MoveRight,
    /// Drop figure one row (freezes when blocked)
    SoftDrop,
    /// Drop figure to the lowest valid row and freeze
    HardDrop,
    /// Advance to the next rotation state
    Rotate,
    /// Stash or swap the figure (once per figure)
    Hold,
    /// Toggle the gravity pause flag
    Pause,
    /// Move the shooter one column left
    ShooterLeft,
    /// Move the shooter one column right
    ShooterRight,
    /// Fire a bullet from the shooter column
    Shoot,
    /// Start a fresh game
    Reset,
}
