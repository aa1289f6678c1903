//! Figure module - the active falling piece
//!
//! A figure is plain data: kind, rotation index and the grid position of its
//! 4x4 box. Transformations return a new figure; the engine decides whether
//! to commit it after a collision check.

use crate::shapes::{self, CellOffset};
use crate::types::{Cell, PieceKind, SPAWN_ANCHOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Figure {
    pub kind: PieceKind,
    /// Index into the kind's rotation states (wraps)
    pub rotation: usize,
    /// Column of the bounding box's left edge; may be negative
    pub x: i32,
    /// Row of the bounding box's top edge
    pub y: i32,
}

impl Figure {
    /// Create a figure at the spawn anchor in rotation 0
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_ANCHOR.0,
            y: SPAWN_ANCHOR.1,
        }
    }

    pub fn color(&self) -> Cell {
        self.kind.color()
    }

    /// Occupied offsets relative to the anchor, as (col, row)
    pub fn offsets(&self) -> [CellOffset; 4] {
        shapes::cells(self.kind, self.rotation)
    }

    /// Occupied grid cells as (x, y)
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.offsets()
            .map(|(col, row)| (self.x.saturating_add(col), self.y.saturating_add(row)))
    }

    /// Same figure moved by (dx, dy); coordinates saturate instead of wrapping
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Next rotation state, wrapping to 0 after the last one
    pub fn rotated(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % shapes::rotation_count(self.kind),
            ..*self
        }
    }

    /// Same figure moved back to the spawn anchor (rotation kept)
    pub fn at_spawn(&self) -> Self {
        Self {
            x: SPAWN_ANCHOR.0,
            y: SPAWN_ANCHOR.1,
            ..*self
        }
    }
}
