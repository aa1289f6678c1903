//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer, which is then flushed to the terminal as a diff.
//!
//! - `core` stays deterministic and testable
//! - cells are drawn 2 characters wide to offset the glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use shootris_core as core;
pub use shootris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
