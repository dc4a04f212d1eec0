//! Falling Block entry point
//!
//! Parses the command line, loads the session config and runs one round in
//! the terminal (or headless, printing renderer events as JSON lines).

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use glam::Vec2;

use falling_block::platform::{KeyboardInput, ManualClock, NoInput};
use falling_block::renderer::{JsonLinesRenderer, TerminalGuard, TerminalRenderer};
use falling_block::sim::PlayField;
use falling_block::{FrontendError, GameLoop, LoopExit, SessionConfig};

#[derive(Debug, Parser)]
#[command(name = "falling-block", version, about)]
struct Args {
    /// JSON file overriding any of the session parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for block placement and colours (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Let the paddle play itself
    #[arg(long)]
    demo: bool,

    /// No terminal UI: autopilot plays and renderer events go to stdout as JSON lines
    #[arg(long)]
    headless: bool,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), args.headless)?;

    let config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("Falling Block starting (seed {seed})");

    let mut field = PlayField::new(&config, seed).context("invalid session config")?;

    if args.headless {
        run_headless(&config, &mut field)
    } else {
        run_terminal(&config, &mut field, args.demo)
    }
}

/// Log to stderr by default. The full-screen UI owns the terminal, so there
/// logging stays off unless a file or RUST_LOG is given.
fn init_logging(log_file: Option<&Path>, headless: bool) -> anyhow::Result<()> {
    let filter = default_log_filter(log_file.is_some(), headless);
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn default_log_filter(to_file: bool, headless: bool) -> &'static str {
    if headless || to_file { "info" } else { "off" }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
        ^ 0xC0FFEE
}

fn run_headless(config: &SessionConfig, field: &mut PlayField) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let renderer = JsonLinesRenderer::new(stdout.lock());
    let mut game =
        GameLoop::with_clock(renderer, NoInput, ManualClock::default(), config.tick_duration())
            .autopilot(true);

    let exit = game.run(field).context("headless run failed")?;
    let (renderer, _, clock) = game.into_parts();
    log::info!(
        "Headless run finished: {:?}, score {}, {} ticks ({:.1}s simulated), {} frames",
        exit,
        field.score,
        field.ticks,
        clock.elapsed.as_secs_f64(),
        renderer.frames()
    );
    Ok(())
}

fn run_terminal(config: &SessionConfig, field: &mut PlayField, demo: bool) -> anyhow::Result<()> {
    let guard = TerminalGuard::enter().context("failed to set up the terminal")?;
    if !guard.reports_key_release() {
        log::info!("Key releases unavailable, Down/S stops the paddle");
    }
    let result = play(config, field, demo);
    // Restore the terminal before reporting anything
    drop(guard);

    match result.context("game loop failed")? {
        LoopExit::Finished(outcome) => println!("{} score: {}", outcome.message(), field.score),
        LoopExit::Cancelled => println!("Quit. score: {}", field.score),
    }
    Ok(())
}

fn play(
    config: &SessionConfig,
    field: &mut PlayField,
    demo: bool,
) -> Result<LoopExit, FrontendError> {
    // Canvas is the field with the same margin on every side
    let canvas = Vec2::new(
        config.field_x * 2.0 + config.field_width,
        config.field_y * 2.0 + config.field_height,
    );
    let renderer = TerminalRenderer::stdout(canvas)?;
    let mut game =
        GameLoop::new(renderer, KeyboardInput::new(), config.tick_duration()).autopilot(demo);

    let exit = game.run(field)?;
    if let LoopExit::Finished(_) = exit {
        game.linger()?;
    }
    Ok(exit)
}
