use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use canvas_snake::config::{
    BoardConfig, DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_TICK_INTERVAL_MS,
};
use canvas_snake::controller::{Controller, Event};
use canvas_snake::error::{Result, SnakeError};
use canvas_snake::game::GameState;
use canvas_snake::input::{TerminalInput, map_key_event};
use canvas_snake::renderer::render_frame;
use canvas_snake::terminal_runtime::{AppTerminal, TerminalSession, install_panic_hook};
use clap::Parser;
use crossterm::event::{self, Event as TermEvent};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Upper bound on one input wait, so resizes are picked up while stopped.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Cell edge length in surface pixels.
    #[arg(long = "cell-size", default_value_t = DEFAULT_CELL_SIZE_PX)]
    cell_size: u32,

    /// Milliseconds between game ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file. Logging is off otherwise.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = BoardConfig::new(cli.width, cli.height, cli.cell_size, cli.tick_ms)?;

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    install_panic_hook();

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config.grid, seed),
        None => GameState::new(config.grid),
    };
    info!(?config, seed = ?cli.seed, "starting");

    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut(), state, config)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| SnakeError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run(terminal: &mut AppTerminal, state: GameState, config: BoardConfig) -> Result<()> {
    let mut controller = Controller::with_state(state, config.tick_interval, Instant::now());
    draw(terminal, &controller, config)?;

    loop {
        let timeout = controller
            .time_until_tick(Instant::now())
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                TermEvent::Key(key) => match map_key_event(key) {
                    Some(TerminalInput::Quit) => break,
                    Some(TerminalInput::Restart) => {
                        dispatch(terminal, &mut controller, Event::Restart, config)?;
                    }
                    Some(TerminalInput::Key(key)) => {
                        dispatch(terminal, &mut controller, Event::Key(key), config)?;
                    }
                    None => {}
                },
                TermEvent::Resize(..) => draw(terminal, &controller, config)?,
                _ => {}
            }
        }

        if let Some(tick) = controller.poll_timer(Instant::now()) {
            dispatch(terminal, &mut controller, tick, config)?;
        }
    }

    info!(score = controller.state().score, "quit");
    Ok(())
}

/// Applies one event and redraws before the next event is looked at.
fn dispatch(
    terminal: &mut AppTerminal,
    controller: &mut Controller,
    event: Event,
    config: BoardConfig,
) -> Result<()> {
    if controller.dispatch(event, Instant::now()) {
        draw(terminal, controller, config)?;
    }
    Ok(())
}

fn draw(terminal: &mut AppTerminal, controller: &Controller, config: BoardConfig) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, controller.state(), config.cell_size_px))?;
    Ok(())
}
