//! Grid tests through the public facade

use shootris::core::Grid;
use shootris::types::{EMPTY, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT);
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);

    for y in 0..GRID_HEIGHT as i32 {
        for x in 0..GRID_WIDTH as i32 {
            assert_eq!(grid.get(x, y), Some(EMPTY), "cell ({}, {})", x, y);
            assert!(!grid.is_occupied(x, y));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::default();

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(GRID_WIDTH as i32, 0), None);
    assert_eq!(grid.get(0, GRID_HEIGHT as i32), None);
    assert!(grid.is_out_of_bounds(-1, 0));
    assert!(!grid.is_occupied(-1, 0));
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::default();

    assert!(grid.set(5, 10, 6));
    assert_eq!(grid.get(5, 10), Some(6));
    assert!(grid.is_occupied(5, 10));

    assert!(!grid.set(10, 0, 1));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_full_row_detection() {
    let mut grid = Grid::new(7, 4);
    for x in 0..6 {
        grid.set(x, 3, 2);
    }
    assert!(!grid.is_row_full(3));
    grid.set(6, 3, 2);
    assert!(grid.is_row_full(3));
    assert!(!grid.is_row_full(2));
}

#[test]
fn test_shift_rows_down_keeps_row_zero() {
    let mut grid = Grid::from_rows(&[
        [1u8, 0, 0],
        [0, 2, 0],
        [0, 0, 3],
        [4, 4, 4],
    ])
    .unwrap();

    grid.shift_rows_down(3);

    let rows: Vec<&[u8]> = grid.rows().collect();
    assert_eq!(rows[0], &[1, 0, 0]);
    assert_eq!(rows[1], &[1, 0, 0]);
    assert_eq!(rows[2], &[0, 2, 0]);
    assert_eq!(rows[3], &[0, 0, 3]);
}

#[test]
fn test_from_rows_rejects_ragged_input() {
    let rows: [&[u8]; 2] = [&[0, 0], &[0]];
    assert!(Grid::from_rows(&rows).is_none());
    let empty: [&[u8]; 0] = [];
    assert!(Grid::from_rows(&empty).is_none());
}

#[test]
fn test_clear_empties_every_cell() {
    let mut grid = Grid::default();
    grid.set(0, 0, 1);
    grid.set(9, 19, 7);
    grid.clear();
    assert_eq!(grid.occupied_count(), 0);
}
