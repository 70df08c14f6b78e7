//! Stackfall terminal runner (default binary).
//!
//! Reads config from the environment, loads the stored high score, then runs
//! the game on a fixed 16 ms step with a framebuffer renderer. Anything worth
//! reporting while the terminal is in raw mode is queued and printed after
//! the terminal has been restored.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use stackfall::config::AppConfig;
use stackfall::core::{FixedStep, GameSnapshot, GameState};
use stackfall::input::{should_quit, InputHandler};
use stackfall::store::HighScoreFile;
use stackfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// What happened during a session, reported on exit.
#[derive(Debug, Default)]
struct SessionLog {
    messages: Vec<String>,
    final_score: u32,
    final_level: u32,
    final_lines: u32,
    high_score: u32,
    saved_high_score: bool,
}

impl SessionLog {
    fn record(&mut self, game: &GameState) {
        self.final_score = game.score();
        self.final_level = game.level();
        self.final_lines = game.lines();
    }
}

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let store = HighScoreFile::new(config.score_path.clone());
    let high_score = store.load_or_default();

    let mut game = GameState::new(config.seed).with_high_score(high_score);
    game.select_level(config.start_level);

    let mut log = SessionLog {
        messages: config.warnings.clone(),
        high_score,
        ..SessionLog::default()
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &store, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();

    for message in &log.messages {
        eprintln!("{}", message);
    }
    println!(
        "[Stackfall] Seed {} | score {} | level {} | lines {} | high score {}{}",
        config.seed,
        log.final_score,
        log.final_level,
        log.final_lines,
        log.high_score,
        if log.saved_high_score { " (saved)" } else { "" }
    );
    result
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    store: &HighScoreFile,
    log: &mut SessionLog,
) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut clock = FixedStep::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_ms: u64 = 0;

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(clock.until_next_ms());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            log.record(game);
                            return Ok(());
                        }
                        input.handle_key_press(key);
                    }
                    KeyEventKind::Repeat => {
                        input.handle_key_repeat(key);
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Ticks owed since the last pass.
        let now_ms = started.elapsed().as_millis() as u64;
        let elapsed_ms = now_ms.saturating_sub(last_ms);
        last_ms = now_ms;

        input.update(elapsed_ms.min(u64::from(u32::MAX)) as u32);
        let steps = clock.push(elapsed_ms);
        if steps == 0 {
            continue;
        }

        // Queued actions go with the first tick; catch-up ticks only advance.
        let frame = input.take_frame();
        game.step(&frame.actions, frame.soft_drop_held);
        for _ in 1..steps {
            game.tick(frame.soft_drop_held);
        }

        log.record(game);
        if let Some(score) = game.take_high_score_update() {
            log.high_score = score;
            match store.save(score) {
                Ok(()) => log.saved_high_score = true,
                Err(e) => log
                    .messages
                    .push(format!("[Store] Failed to save high score {}: {:#}", score, e)),
            }
        }
    }
}
