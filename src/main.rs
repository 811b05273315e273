//! Blockfall terminal runner (default binary).
//!
//! Drives one game session at a fixed frame rate: drain key presses, apply
//! them, advance gravity by one tick, draw. Logging goes to a file because
//! the terminal is in raw mode on the alternate screen.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::prelude::*;

use blockfall::core::{Flow, GameConfig, GameSession};
use blockfall::input::drain_commands;
use blockfall::term::{Canvas, GameView, TerminalRenderer, Viewport};
use blockfall::types::{FRAMES_PER_SECOND, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    #[arg(long, default_value_t = GRID_WIDTH as u32, help = "Grid width in cells")]
    width: u32,

    #[arg(long, default_value_t = GRID_HEIGHT as u32, help = "Grid height in cells")]
    height: u32,

    #[arg(
        long,
        default_value_t = FRAMES_PER_SECOND,
        value_parser = clap::value_parser!(u32).range(2..=240),
        help = "Frames per second; the piece falls one row every half second"
    )]
    fps: u32,

    #[arg(long, help = "Seed for a reproducible piece sequence")]
    seed: Option<u64>,

    #[arg(long, help = "Write logs to this file (nothing is logged without it)")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = DEBUG, -vv = TRACE)")]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.verbose)?;
    }

    let config = GameConfig::from_dimensions(cli.width, cli.height, cli.fps / 2)
        .context("invalid game configuration")?;
    let mut session = match cli.seed {
        Some(seed) => GameSession::new(config, seed),
        None => GameSession::from_entropy(config),
    };
    info!(
        width = config.width,
        height = config.height,
        ticks_per_drop = config.ticks_per_drop,
        seed = ?session.seed(),
        "session created"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, cli.fps);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    info!(score = session.score(), lines = session.lines(), "session ended");
    println!("final score: {}", session.score());
    Ok(())
}

fn init_logging(path: &Path, verbose: u8) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession, fps: u32) -> Result<()> {
    let frame_time = Duration::from_secs(1) / fps;
    let view = GameView::default();
    let mut canvas = Canvas::new(0, 0);

    loop {
        let frame_start = Instant::now();

        for cmd in drain_commands()? {
            if session.handle_command(cmd) == Flow::Exit {
                return Ok(());
            }
        }

        if let Some(lock) = session.tick() {
            debug!(
                rows = lock.rows_cleared,
                points = lock.points,
                game_over = lock.game_over,
                "piece locked"
            );
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut canvas);
        term.present(&mut canvas)?;

        if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
