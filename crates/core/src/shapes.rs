//! Shapes module - the rotation-state catalog
//!
//! Every kind owns an ordered list of rotation states. A state is four flat
//! offsets into a 4x4 box: offset `o` is column `o % 4`, row `o / 4`.
//! Rotating advances to the next state and wraps; there are no wall kicks.
//!
//! J and T share one table, and Z's first state is the O square. Both quirks
//! are part of the catalog and are pinned by tests.

use crate::types::{PieceKind, BOX_SIZE};

/// Four flat offsets (0..16) inside the 4x4 bounding box
pub type RotationState = [u8; 4];

/// Grid-relative offset of a single cell: (col, row)
pub type CellOffset = (i32, i32);

const I_STATES: [RotationState; 2] = [[1, 5, 9, 13], [4, 5, 6, 7]];

const J_STATES: [RotationState; 4] = [[1, 2, 5, 9], [0, 4, 5, 6], [1, 5, 9, 8], [4, 5, 6, 10]];

const L_STATES: [RotationState; 4] = [[2, 6, 10, 11], [3, 5, 6, 7], [1, 2, 6, 10], [5, 6, 7, 9]];

const O_STATES: [RotationState; 1] = [[1, 2, 5, 6]];

const S_STATES: [RotationState; 2] = [[2, 3, 5, 6], [1, 5, 6, 10]];

const T_STATES: [RotationState; 4] = [[1, 2, 5, 9], [0, 4, 5, 6], [1, 5, 9, 8], [4, 5, 6, 10]];

const Z_STATES: [RotationState; 2] = [[1, 2, 5, 6], [2, 5, 6, 9]];

/// All rotation states of a kind, in rotation order
pub fn rotation_states(kind: PieceKind) -> &'static [RotationState] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// The state for `rotation`, wrapping past the last one
pub fn rotation_state(kind: PieceKind, rotation: usize) -> &'static RotationState {
    let states = rotation_states(kind);
    &states[rotation % states.len()]
}

/// Convert a flat box offset to (col, row)
#[inline(always)]
pub fn offset_to_cell(offset: u8) -> CellOffset {
    ((offset % BOX_SIZE) as i32, (offset / BOX_SIZE) as i32)
}

/// Occupied (col, row) pairs of a kind in a given rotation
pub fn cells(kind: PieceKind, rotation: usize) -> [CellOffset; 4] {
    let state = *rotation_state(kind, rotation);
    state.map(offset_to_cell)
}
