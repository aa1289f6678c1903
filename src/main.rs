//! Terminal runner for shootris (default binary).
//!
//! Uses crossterm for input and a custom framebuffer-based renderer. The
//! runner owns the clocks: gravity fires every `Engine::tick_interval_ms`
//! and bullets advance every `SHOOTRIS_BULLET_MS`. Both stop while paused.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use shootris::core::{Engine, GameSnapshot};
use shootris::input::{handle_key_event, should_quit, InputHandler};
use shootris::settings::Settings;
use shootris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use shootris::types::GameAction;

fn main() -> Result<()> {
    let settings = Settings::from_env(rand::random::<u32>())?;
    init_logging(&settings)?;

    let mut engine = Engine::new(settings.game.clone()).context("failed to start game")?;
    tracing::info!(
        seed = settings.game.seed,
        level = settings.game.level,
        bullet_ms = settings.bullet_ms,
        "starting shootris"
    );

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut engine, &settings));

    // Always try to restore terminal state.
    let restored = term.exit();
    tracing::info!(score = engine.score(), "exiting");
    result.and(restored)
}

fn init_logging(settings: &Settings) -> Result<()> {
    let log_file = File::create(&settings.log_file)
        .with_context(|| format!("cannot create log file {}", settings.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Fires once per `interval` of accumulated, unpaused time.
struct Clock {
    interval: Duration,
    last: Instant,
}

impl Clock {
    fn new(interval_ms: u32) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms as u64),
            last: Instant::now(),
        }
    }

    fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.last.elapsed())
    }

    fn fire(&mut self) -> bool {
        if self.last.elapsed() < self.interval {
            return false;
        }
        self.last = Instant::now();
        true
    }

    fn restart(&mut self) {
        self.last = Instant::now();
    }
}

fn apply(engine: &mut Engine, input: &mut InputHandler, action: GameAction) {
    engine.apply_action(action);
    if action == GameAction::Reset {
        input.reset();
    }
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine, settings: &Settings) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut gravity = Clock::new(engine.tick_interval_ms());
    let mut bullets = Clock::new(settings.bullet_ms);
    let mut last_input = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = if snap.playable() {
            gravity.remaining().min(bullets.remaining())
        } else {
            Duration::from_millis(100)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        // Movement keys start DAS/ARR; everything else is a single action.
                        if let Some(action) = input.handle_key_press(key.code) {
                            apply(engine, &mut input, action);
                        } else if let Some(action) = handle_key_event(key) {
                            if !matches!(
                                action,
                                GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
                            ) {
                                apply(engine, &mut input, action);
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats internally.
                    }
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed_ms = last_input.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_input = Instant::now();
        for action in input.update(elapsed_ms) {
            apply(engine, &mut input, action);
        }

        if engine.paused() || engine.game_over() {
            gravity.restart();
            bullets.restart();
            continue;
        }

        if bullets.fire() {
            engine.update_bullets();
        }
        if gravity.fire() {
            engine.tick();
        }
    }
}
