//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the whole falling-block-plus-shooter simulation. It
//! has **no dependencies** on terminals, input devices or timers: the caller
//! drives gravity by calling [`Engine::tick`] every
//! [`Engine::tick_interval_ms`] and forwards discrete commands.
//!
//! - **Deterministic**: the same seed produces the same figure sequence
//! - **Testable**: every rule is a plain method on [`Engine`]
//! - **Portable**: runs headless, in a terminal, or anywhere else
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size cell matrix with row shifting
//! - [`shapes`]: rotation-state catalog for the seven kinds
//! - [`figure`]: the active piece as plain data
//! - [`collision`]: figure-versus-grid blocking test
//! - [`rng`]: seedable LCG and the uniform figure generator
//! - [`engine`]: gravity, freeze, line clears, hold, game over, reset
//! - [`bullets`]: shooter projectiles that erase single cells
//! - [`scoring`]: quadratic line-clear reward and gravity interval
//! - [`config`]: game configuration and validation errors
//! - [`snapshot`]: owned state copy for renderers
//!
//! # Game Rules
//!
//! - **Uniform spawns**: every kind is equally likely on every draw
//! - **Rotation**: cycles through a kind's states; a blocked rotation fails
//!   outright (no wall kicks)
//! - **Hold**: once per figure; a swapped-in figure restarts at (3, 0)
//! - **Line clears**: rows 1 and below; `n` rows at once score `n * n`
//! - **Shooter**: bullets fall from row 0 and erase the first filled cell
//!   they meet
//!
//! # Example
//!
//! ```
//! use shootris_core::Engine;
//! use shootris_types::GameAction;
//!
//! let mut game = Engine::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The dropped figure is now part of the grid.
//! assert_eq!(game.grid().occupied_count(), 4);
//! assert_eq!(game.figure().y, 0);
//! ```

pub mod bullets;
pub mod collision;
pub mod config;
pub mod engine;
pub mod figure;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use shootris_types as types;

// Re-export commonly used types for convenience
pub use bullets::Bullet;
pub use collision::intersects;
pub use config::{ConfigError, GameConfig};
pub use engine::Engine;
pub use figure::Figure;
pub use grid::Grid;
pub use rng::{FigureGenerator, SimpleRng};
pub use scoring::{line_clear_score, tick_interval_ms};
pub use snapshot::GameSnapshot;
