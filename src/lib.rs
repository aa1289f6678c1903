//! Shootris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name as
//! `shootris::{core,input,term,types}` and hosts the runner's settings.

pub mod settings;

pub use shootris_core as core;
pub use shootris_input as input;
pub use shootris_term as term;
pub use shootris_types as types;
