//! Terminal snake runner (default binary).
//!
//! `tui-snake` plays in the terminal; `tui-snake trace` runs headless and
//! prints JSON states. Configuration comes from `SNAKE_*` environment variables,
//! with command-line flags taking precedence.

use std::io;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_snake::core::TickEvent;
use tui_snake::engine::{Controller, GameConfig, Ticker};
use tui_snake::input::{handle_event, should_quit};
use tui_snake::logging;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::trace::{run_trace, TraceConfig};

#[derive(Parser)]
#[command(name = "tui-snake")]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// Seed for food placement (overrides SNAKE_SEED)
    #[arg(long, global = true)]
    seed: Option<u32>,

    /// Tick interval in milliseconds (overrides SNAKE_TICK_MS)
    #[arg(long)]
    tick_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run without a terminal UI and print one JSON state per tick
    Trace {
        /// Maximum number of ticks to run
        #[arg(long, default_value_t = 200)]
        ticks: u64,

        /// Move script: u/d/l/r (or w/a/s) turn, p pauses, '.' waits
        #[arg(long, default_value = "")]
        moves: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::from_env();
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(ms) = cli.tick_ms.filter(|&ms| ms > 0) {
        config.tick_ms = ms;
    }
    logging::init(&config)?;

    match cli.command {
        Some(Command::Trace { ticks, moves }) => {
            let trace = TraceConfig {
                seed: config.resolve_seed(),
                ticks,
                moves,
            };
            let summary = run_trace(&trace, &mut io::stdout().lock())?;
            info!("trace finished: {:?}", summary);
            Ok(())
        }
        None => play(&config),
    }
}

fn play(config: &GameConfig) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let seed = config.resolve_seed();
    let mut controller = Controller::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut ticker = Ticker::new(config.tick_duration());
    ticker.start(Instant::now());
    info!("playing: seed {}, tick {}ms", seed, config.tick_ms);

    let mut dirty = true;
    loop {
        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(controller.state(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        if event::poll(ticker.timeout(Instant::now()))? {
            let ev = event::read()?;
            match &ev {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
                    info!("quit at score {}", controller.state().score);
                    return Ok(());
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }

            if let Some(action) = handle_event(&ev) {
                controller.apply(action);
                dirty = true;
            }
        }

        // Tick.
        if ticker.poll(Instant::now()) && controller.tick() != TickEvent::Idle {
            dirty = true;
        }
    }
}
