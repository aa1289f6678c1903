//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and provides a DAS/ARR handler that
//! repeats figure movement while a key is held, including on terminals that
//! never report key releases.

pub mod handler;
pub mod map;

pub use shootris_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
