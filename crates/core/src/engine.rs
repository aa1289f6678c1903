//! Engine module - owns and advances the complete simulation state
//!
//! This module ties together all core components: grid, figures, generator,
//! collision, scoring and bullets. Every mutation goes through an `Engine`
//! method; the render/input adapter only reads state and calls operations.
//!
//! Once the run state is `GameOver`, every operation except [`Engine::reset`]
//! is a no-op returning `false` (or `0`).

use std::collections::VecDeque;

use crate::bullets::{step_bullets, Bullet};
use crate::collision::intersects;
use crate::config::{ConfigError, GameConfig};
use crate::figure::Figure;
use crate::grid::Grid;
use crate::rng::FigureGenerator;
use crate::scoring::{line_clear_score, tick_interval_ms};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind, RunState};

/// Complete simulation state for one game
#[derive(Debug, Clone)]
pub struct Engine {
    config: GameConfig,
    grid: Grid,
    figure: Figure,
    queue: VecDeque<Figure>,
    hold: Option<Figure>,
    /// Set by a hold, cleared by the next spawn
    hold_used: bool,
    generator: FigureGenerator,
    bullets: Vec<Bullet>,
    shooter_x: i32,
    score: u32,
    level: u32,
    run_state: RunState,
    paused: bool,
}

impl Engine {
    /// Start a game with a validated configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Start a game on the default 10x20 grid
    pub fn with_seed(seed: u32) -> Self {
        Self::build(GameConfig::with_seed(seed))
    }

    /// Start a game on a prepared grid
    ///
    /// The first figure is spawned as usual; if it is already blocked the
    /// game starts over.
    pub fn with_grid(config: GameConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        let expected = (config.width, config.height);
        let actual = (grid.width(), grid.height());
        if expected != actual {
            return Err(ConfigError::GridMismatch { expected, actual });
        }

        let mut engine = Self::build(config);
        engine.grid = grid;
        if intersects(&engine.figure, &engine.grid) {
            engine.run_state = RunState::GameOver;
        }
        Ok(engine)
    }

    fn build(config: GameConfig) -> Self {
        let mut engine = Self {
            grid: Grid::new(config.width, config.height),
            figure: Figure::new(PieceKind::I),
            queue: VecDeque::with_capacity(config.queue_len + 1),
            hold: None,
            hold_used: false,
            generator: FigureGenerator::new(config.seed),
            bullets: Vec::new(),
            shooter_x: config.shooter_start,
            score: 0,
            level: config.level,
            run_state: RunState::Running,
            paused: false,
            config,
        };
        engine.reset();
        engine
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Upcoming figures, head first
    pub fn queue(&self) -> &VecDeque<Figure> {
        &self.queue
    }

    pub fn hold_figure(&self) -> Option<&Figure> {
        self.hold.as_ref()
    }

    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn shooter_x(&self) -> i32 {
        self.shooter_x
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Milliseconds between automatic gravity ticks
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.level)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.board.clear();
        out.board.extend_from_slice(self.grid.cells());
        out.active = self.figure;
        out.next_queue.clear();
        out.next_queue.extend(self.queue.iter().copied());
        out.hold = self.hold;
        out.hold_used = self.hold_used;
        out.bullets.clear();
        out.bullets.extend_from_slice(&self.bullets);
        out.shooter_x = self.shooter_x;
        out.score = self.score;
        out.level = self.level;
        out.run_state = self.run_state;
        out.paused = self.paused;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Automatic gravity step; suppressed while paused
    pub fn tick(&mut self) -> bool {
        if !self.is_running() || self.paused {
            return false;
        }
        self.soft_drop();
        true
    }

    /// Move the figure down one row, freezing it when it cannot move
    ///
    /// Returns true if the figure moved.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        let moved = self.figure.shifted(0, 1);
        if intersects(&moved, &self.grid) {
            self.freeze();
            return false;
        }
        self.figure = moved;
        true
    }

    /// Drop the figure to the lowest row it fits and freeze it
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }

        let start_y = self.figure.y;
        loop {
            let moved = self.figure.shifted(0, 1);
            if intersects(&moved, &self.grid) {
                break;
            }
            self.figure = moved;
        }
        let distance = (self.figure.y - start_y) as u32;

        self.freeze();
        distance
    }

    /// Write the figure into the grid, clear lines and spawn the next figure
    ///
    /// The game is over if the fresh figure is blocked at the spawn anchor.
    pub fn freeze(&mut self) {
        if !self.is_running() {
            return;
        }

        let color = self.figure.color();
        for (x, y) in self.figure.cells() {
            self.grid.set(x, y, color);
        }
        tracing::debug!(
            kind = ?self.figure.kind,
            x = self.figure.x,
            y = self.figure.y,
            "figure frozen"
        );

        self.clear_lines();
        self.spawn_next();

        if intersects(&self.figure, &self.grid) {
            self.run_state = RunState::GameOver;
            tracing::info!(score = self.score, "game over");
        }
    }

    /// Remove full rows and score them
    ///
    /// Rows are scanned top to bottom starting at row 1; row 0 is never
    /// tested. Each full row is dropped by shifting the rows above it down,
    /// which leaves row 0 in place (and duplicated into row 1). Scores the
    /// square of the number of rows removed and returns that number.
    pub fn clear_lines(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }

        let mut lines = 0;
        for y in 1..self.grid.height() {
            if self.grid.is_row_full(y) {
                lines += 1;
                self.grid.shift_rows_down(y);
            }
        }

        if lines > 0 {
            self.score = self.score.saturating_add(line_clear_score(lines));
            tracing::debug!(lines, score = self.score, "lines cleared");
        }
        lines
    }

    /// Promote the queue head to the active figure and top the queue up
    pub fn spawn_next(&mut self) {
        if !self.is_running() {
            return;
        }

        let target_len = self.config.queue_len;
        if self.queue.is_empty() {
            self.generator.refill_queue(&mut self.queue, target_len);
        }
        if let Some(next) = self.queue.pop_front() {
            self.figure = next;
        }
        self.generator.refill_queue(&mut self.queue, target_len);
        self.hold_used = false;
    }

    /// Stash the figure, or swap it with the held one
    ///
    /// Allowed once per figure. A swapped-in figure returns to the spawn
    /// anchor with its rotation kept.
    pub fn hold(&mut self) -> bool {
        if !self.is_running() || self.hold_used {
            return false;
        }

        match self.hold.take() {
            None => {
                self.hold = Some(self.figure);
                self.spawn_next();
            }
            Some(held) => {
                self.hold = Some(std::mem::replace(&mut self.figure, held.at_spawn()));
            }
        }
        self.hold_used = true;
        tracing::debug!(held = ?self.hold.map(|f| f.kind), "hold");

        true
    }

    /// Shift the figure horizontally; reverted when blocked
    pub fn move_by(&mut self, dx: i32) -> bool {
        if !self.is_running() {
            return false;
        }

        let moved = self.figure.shifted(dx, 0);
        if intersects(&moved, &self.grid) {
            return false;
        }
        self.figure = moved;
        true
    }

    /// Advance to the next rotation state; reverted when blocked (no kicks)
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        let rotated = self.figure.rotated();
        if intersects(&rotated, &self.grid) {
            return false;
        }
        self.figure = rotated;
        true
    }

    /// Toggle the pause flag
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Fire a bullet from the shooter column on row 0
    pub fn shoot(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.bullets.push(Bullet::new(self.shooter_x, 0));
        true
    }

    /// Advance every bullet one row; returns the number of cells erased
    pub fn update_bullets(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }
        step_bullets(&mut self.bullets, &mut self.grid)
    }

    /// Move the shooter, clamped to the grid columns
    ///
    /// Returns true if the shooter column changed.
    pub fn move_shooter(&mut self, dx: i32) -> bool {
        if !self.is_running() {
            return false;
        }

        let max_x = self.grid.width() as i32 - 1;
        let x = self.shooter_x.saturating_add(dx).clamp(0, max_x);
        let changed = x != self.shooter_x;
        self.shooter_x = x;
        changed
    }

    /// Start a fresh game with the same configuration
    ///
    /// The figure sequence continues from the generator's current state.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.width, self.config.height);
        self.score = 0;
        self.level = self.config.level;
        self.queue.clear();
        self.hold = None;
        self.hold_used = false;
        self.paused = false;
        self.bullets.clear();
        self.shooter_x = self.config.shooter_start;
        self.run_state = RunState::Running;
        self.spawn_next();

        tracing::info!(
            width = self.config.width,
            height = self.config.height,
            level = self.level,
            "game reset"
        );
    }

    /// Apply an input-adapter action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_by(-1),
            GameAction::MoveRight => self.move_by(1),
            GameAction::SoftDrop => {
                if !self.is_running() {
                    return false;
                }
                self.soft_drop();
                true
            }
            GameAction::HardDrop => {
                if !self.is_running() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.pause(),
            GameAction::ShooterLeft => self.move_shooter(-1),
            GameAction::ShooterRight => self.move_shooter(1),
            GameAction::Shoot => self.shoot(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
