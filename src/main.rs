//! Bitplane Pong runner (default binary).
//!
//! Runs the fixed tick loop against the terminal sink, or against an
//! in-memory sink when `PONG_HEADLESS_FRAMES` is set.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use pong_bitplane::core::MemorySink;
use pong_bitplane::input::{handle_key_event, should_quit, InputLatch};
use pong_bitplane::term::{TerminalSink, Viewport};
use pong_bitplane::types::InputSignal;
use pong_bitplane::{init_logging, Game, RunConfig};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;
    log::info!("starting with {:?}", config);

    let mut game = Game::new(&config);

    if let Some(frames) = config.headless_frames {
        return run_headless(&mut game, frames);
    }

    let mut sink = TerminalSink::new();
    sink.enter()?;

    let result = run(&mut game, &mut sink, &config);

    // Always try to restore terminal state.
    let _ = sink.exit();
    result
}

fn run(game: &mut Game, sink: &mut TerminalSink, config: &RunConfig) -> Result<()> {
    let tick_duration = Duration::from_millis(u64::from(config.tick_ms));
    let mut latch = InputLatch::new();
    let mut status = String::with_capacity(64);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Held keys arrive as repeats; releases carry no signal.
                if key.kind != KeyEventKind::Release {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(signal) = handle_key_event(key) {
                        latch.press(signal);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            game.tick(latch.take(), &mut *sink);

            game.status_into(&mut status);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            sink.present(&status, Viewport::new(w, h))?;
        }
    }
}

fn run_headless(game: &mut Game, frames: u64) -> Result<()> {
    let mut sink = MemorySink::new();
    for frame in 0..frames {
        let signal = if frame == 0 {
            InputSignal::START
        } else {
            InputSignal::NONE
        };
        game.tick(signal, &mut sink);
    }

    let score = game.score();
    println!(
        "{} frames, {} bytes written, {} pixels lit, score {}:{}",
        game.driver().frames(),
        sink.writes(),
        sink.plane().count_ones(),
        score.left,
        score.right
    );
    Ok(())
}
