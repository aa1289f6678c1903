//! Snapshot module - owned copy of game state for renderers
//!
//! `Engine::snapshot_into` refills an existing snapshot in place, so a
//! render loop can keep one and reuse its buffers across frames.

use crate::bullets::Bullet;
use crate::figure::Figure;
use crate::types::{Cell, PieceKind, RunState, GRID_HEIGHT, GRID_WIDTH};

/// Owned copy of everything the render adapter draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major grid cells
    pub board: Vec<Cell>,
    pub active: Figure,
    pub next_queue: Vec<Figure>,
    pub hold: Option<Figure>,
    pub hold_used: bool,
    pub bullets: Vec<Bullet>,
    pub shooter_x: i32,
    pub score: u32,
    pub level: u32,
    pub run_state: RunState,
    pub paused: bool,
}

impl GameSnapshot {
    /// Cell at (x, y), or None out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.board.get(y as usize * self.width + x as usize).copied()
    }

    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        if let Some(slot) = self.board.get_mut(idx) {
            *slot = cell;
        }
    }

    pub fn game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    pub fn playable(&self) -> bool {
        !self.game_over() && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            board: vec![0; GRID_WIDTH * GRID_HEIGHT],
            active: Figure::new(PieceKind::I),
            next_queue: Vec::new(),
            hold: None,
            hold_used: false,
            bullets: Vec::new(),
            shooter_x: 0,
            score: 0,
            level: 0,
            run_state: RunState::Running,
            paused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn test_snapshot_into_refills_in_place() {
        let mut engine = Engine::with_seed(9);
        let mut snap = engine.snapshot();
        let board_ptr = snap.board.as_ptr();

        engine.shoot();
        engine.hard_drop();
        engine.snapshot_into(&mut snap);

        assert_eq!(snap, engine.snapshot());
        assert_eq!(snap.board.as_ptr(), board_ptr);
    }

    #[test]
    fn test_cell_bounds() {
        let mut snap = GameSnapshot::default();
        snap.set_cell(2, 3, 5);
        snap.set_cell(-1, 0, 5);
        snap.set_cell(0, GRID_HEIGHT as i32, 5);
        assert_eq!(snap.cell(2, 3), Some(5));
        assert_eq!(snap.cell(-1, 0), None);
        assert_eq!(snap.cell(GRID_WIDTH as i32, 0), None);
        assert_eq!(snap.board.iter().filter(|&&c| c != 0).count(), 1);
    }
}
