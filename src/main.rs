//! Terminal Tetris runner (default binary).
//!
//! Owns the only loop: poll input until the next frame, feed mapped actions to
//! the engine, advance gravity by the measured frame time, then draw.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal;
use log::{debug, info, warn};

use classic_tetris::clock::FrameClock;
use classic_tetris::config::AppConfig;
use classic_tetris::core::{GameSnapshot, GameState};
use classic_tetris::input::{handle_key_event, should_quit};
use classic_tetris::store::JsonFileStore;
use classic_tetris::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    info!(
        "starting: seed {} high score file {}",
        config.seed,
        config.high_score_path.display()
    );

    let store = JsonFileStore::new(&config.high_score_path);
    let mut game = GameState::new(config.seed, Box::new(store));

    let mut term = TerminalRenderer::stdout();
    let result = term.enter().and_then(|_| run(&mut term, &mut game, &config));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("terminal restore failed: {err:#}");
    }
    info!("exiting: high score {}", game.high_score());
    result
}

/// Log to `TETRIS_LOG_PATH` when set; stderr is unusable in raw mode.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("failed to initialise logger")
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, config: &AppConfig) -> Result<()> {
    let view = GameView::default();
    let frame = Duration::from_millis(config.frame_ms as u64);
    let started = Instant::now();
    let mut clock = FrameClock::new(started);
    let mut throttle = RenderThrottle::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        // Input until the frame is due.
        let timeout = clock.until_next(Instant::now(), frame);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key, game.phase()) {
                        if !game.apply_action(action) {
                            debug!("{} ignored while {}", action.as_str(), game.phase().as_str());
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
            if !clock.until_next(Instant::now(), frame).is_zero() {
                continue;
            }
        }

        // Tick.
        let elapsed = clock.advance(Instant::now());
        game.tick(elapsed);
        if let Some(lock) = game.take_last_event() {
            debug!(
                "piece locked: {} line(s), +{} points, level {}",
                lock.lines_cleared, lock.points, lock.level
            );
        }

        // Render.
        game.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render_snapshot(now_ms, &snap) {
            let (w, h) = terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
