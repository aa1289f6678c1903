//! Grid module - the playfield cell matrix
//!
//! The grid is `height` rows of `width` cells, stored as one flat row-major
//! vector. A cell is `0` when empty or the color (1..=7) of the kind that
//! filled it. Dimensions are fixed at construction.
//! Coordinates: (x, y) where x grows to the right and y grows downward; row 0
//! is the top row and the spawn row.

use crate::types::{Cell, EMPTY};

/// The playfield: fixed-size, row-major cell storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    ///
    /// Out-of-range positions are reported as not occupied; callers that need
    /// "blocked" semantics check bounds first.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(cell) if cell > EMPTY)
    }

    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height
    }

    /// Row `y` as a slice, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom (empty slices for a zero-width grid)
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let width = self.width;
        (0..self.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.width > 0 && self.row(y).is_some_and(|row| row.iter().all(|&cell| cell > EMPTY))
    }

    /// Shift rows down into `from`: row k takes row k-1 for k = from..=1
    ///
    /// Row 0 keeps its contents, so after a shift rows 0 and 1 are equal.
    pub fn shift_rows_down(&mut self, from: usize) {
        if from >= self.height {
            return;
        }
        let width = self.width;
        for row in (1..=from).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells.copy_within(src_start..src_start + width, dst_start);
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell > EMPTY).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Build a grid from row slices (all rows must share one width)
    ///
    /// Returns None for ragged or empty input.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first()?.as_ref().len();
        if width == 0 || rows.iter().any(|row| row.as_ref().len() != width) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Some(Self {
            width,
            height: rows.len(),
            cells,
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::GRID_WIDTH, crate::types::GRID_HEIGHT)
    }
}
