//! DAS/ARR input handler for terminal environments.
//!
//! Holding a figure-movement key repeats its action: horizontal moves after a
//! DAS delay, soft drop immediately at its own rate. Terminals that never
//! send key-release events are handled with a release timeout.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::types::{
    GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS, SOFT_DROP_DAS_MS,
};

/// Maximum repeats reported by a single [`InputHandler::update`] call.
pub const MAX_REPEATS: usize = 32;

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers DAS/ARR repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

/// Delay-then-repeat timer for one held control.
#[derive(Debug, Clone)]
struct Repeater {
    das_ms: u32,
    arr_ms: u32,
    das_timer: u32,
    arr_accumulator: u32,
}

impl Repeater {
    fn new(das_ms: u32, arr_ms: u32) -> Self {
        Self {
            das_ms,
            arr_ms: arr_ms.max(1),
            das_timer: 0,
            arr_accumulator: 0,
        }
    }

    fn restart(&mut self) {
        self.das_timer = 0;
        self.arr_accumulator = 0;
    }

    /// Advance by `elapsed_ms`; returns how many repeats are due.
    fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let prev_das = self.das_timer;
        self.das_timer = self.das_timer.saturating_add(elapsed_ms);
        if self.das_timer < self.das_ms {
            return 0;
        }

        // Only time past the DAS delay counts towards the first repeat.
        let excess = if prev_das < self.das_ms {
            self.das_timer - self.das_ms
        } else {
            elapsed_ms
        };
        self.arr_accumulator += excess;

        let due = self.arr_accumulator / self.arr_ms;
        self.arr_accumulator %= self.arr_ms;
        due
    }
}

/// Tracks held figure-movement keys and emits their repeats.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    down_held: bool,
    last_key_time: Instant,
    horizontal_repeat: Repeater,
    down_repeat: Repeater,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            down_held: false,
            last_key_time: Instant::now(),
            horizontal_repeat: Repeater::new(das_delay, arr_rate),
            down_repeat: Repeater::new(SOFT_DROP_DAS_MS, SOFT_DROP_ARR_MS),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn horizontal(&self) -> HorizontalDirection {
        self.horizontal
    }

    /// Register a key press.
    ///
    /// Returns the immediate action for a newly held movement key, `None` for
    /// a key that is already held or is not a repeatable movement key.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
                self.press_horizontal(HorizontalDirection::Left)
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
                self.press_horizontal(HorizontalDirection::Right)
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
                self.last_key_time = Instant::now();
                if self.down_held {
                    return None;
                }
                self.down_held = true;
                self.down_repeat.restart();
                Some(GameAction::SoftDrop)
            }
            _ => None,
        }
    }

    fn press_horizontal(&mut self, direction: HorizontalDirection) -> Option<GameAction> {
        self.last_key_time = Instant::now();
        if self.horizontal == direction {
            return None;
        }
        self.horizontal = direction;
        self.horizontal_repeat.restart();
        match direction {
            HorizontalDirection::Left => Some(GameAction::MoveLeft),
            HorizontalDirection::Right => Some(GameAction::MoveRight),
            HorizontalDirection::None => None,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
                self.release_horizontal(HorizontalDirection::Left)
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
                self.release_horizontal(HorizontalDirection::Right)
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => self.release_down(),
            _ => {}
        }
    }

    fn release_horizontal(&mut self, direction: HorizontalDirection) {
        if self.horizontal == direction {
            self.horizontal = HorizontalDirection::None;
            self.horizontal_repeat.restart();
        }
    }

    fn release_down(&mut self) {
        self.down_held = false;
        self.down_repeat.restart();
    }

    /// Advance held-key timers and collect due repeats.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, MAX_REPEATS> {
        let mut actions = ArrayVec::<GameAction, MAX_REPEATS>::new();

        // Auto-release when terminal does not emit release events.
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        if self.last_key_time.elapsed() > timeout {
            let held = self.horizontal;
            self.release_horizontal(held);
            self.release_down();
        }

        let horizontal_action = match self.horizontal {
            HorizontalDirection::Left => Some(GameAction::MoveLeft),
            HorizontalDirection::Right => Some(GameAction::MoveRight),
            HorizontalDirection::None => None,
        };
        if let Some(action) = horizontal_action {
            for _ in 0..self.horizontal_repeat.advance(elapsed_ms) {
                let _ = actions.try_push(action);
            }
        }

        if self.down_held {
            for _ in 0..self.down_repeat.advance(elapsed_ms) {
                let _ = actions.try_push(GameAction::SoftDrop);
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.down_held = false;
        self.last_key_time = Instant::now();
        self.horizontal_repeat.restart();
        self.down_repeat.restart();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_das_arr_repeats_after_delay() {
        let mut ih = InputHandler::with_config(100, 25);

        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));

        // Before DAS expires: no repeats.
        assert!(ih.update(99).is_empty());

        // Exactly at DAS: still no repeats (needs excess over DAS to accumulate ARR).
        assert!(ih.update(1).is_empty());

        // First ARR interval after DAS: one repeat.
        assert_eq!(ih.update(25).as_slice(), &[GameAction::MoveLeft]);

        // Another ARR interval: one repeat again.
        assert_eq!(ih.update(25).as_slice(), &[GameAction::MoveLeft]);
    }

    #[test]
    fn test_repeated_press_of_held_key_is_ignored() {
        let mut ih = InputHandler::with_config(100, 25);

        assert_eq!(ih.handle_key_press(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(ih.handle_key_press(KeyCode::Right), None);

        // Switching direction restarts the delay.
        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(ih.horizontal(), HorizontalDirection::Left);
    }

    #[test]
    fn test_shooter_keys_are_not_repeated() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Char('a')), None);
        assert_eq!(ih.handle_key_press(KeyCode::Char('s')), None);
        assert_eq!(ih.horizontal(), HorizontalDirection::None);
    }

    #[test]
    fn test_release_stops_repeats() {
        let mut ih = InputHandler::with_config(0, 10).with_key_release_timeout_ms(10_000);

        ih.handle_key_press(KeyCode::Left);
        assert_eq!(ih.update(30).len(), 3);

        ih.handle_key_release(KeyCode::Left);
        assert!(ih.update(30).is_empty());
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(50);

        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(ih.horizontal, HorizontalDirection::Left);

        // Simulate no key-release events by moving the last key time into the past.
        ih.last_key_time = Instant::now() - Duration::from_millis(51);

        assert!(ih.update(0).is_empty());
        assert_eq!(ih.horizontal, HorizontalDirection::None);
    }

    #[test]
    fn test_soft_drop_repeats_use_zero_das_and_50ms_arr() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(10_000);

        assert_eq!(ih.handle_key_press(KeyCode::Down), Some(GameAction::SoftDrop));

        assert!(ih.update(49).is_empty());
        assert_eq!(ih.update(1).as_slice(), &[GameAction::SoftDrop]);
        assert_eq!(
            ih.update(100).as_slice(),
            &[GameAction::SoftDrop, GameAction::SoftDrop]
        );
    }

    #[test]
    fn test_repeats_are_capped_per_update() {
        let mut ih = InputHandler::with_config(0, 1).with_key_release_timeout_ms(10_000);
        ih.handle_key_press(KeyCode::Right);
        assert_eq!(ih.update(1_000).len(), MAX_REPEATS);
    }

    #[test]
    fn test_reset_clears_held_state_and_stops_repeats() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(10_000);

        assert_eq!(ih.handle_key_press(KeyCode::Left), Some(GameAction::MoveLeft));
        assert!(!ih.update(200).is_empty(), "expected repeats before reset");

        ih.reset();
        assert!(ih.update(200).is_empty(), "reset should stop repeats");
    }
}
