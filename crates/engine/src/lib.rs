//! Game loop plumbing around the pure core.
//!
//! - [`controller`]: owns the state and random source, applies input actions
//!   and runs ticks
//! - [`ticker`]: fixed-interval scheduler standing in for the game timer
//! - [`config`]: `SNAKE_*` environment configuration
//!
//! # Environment Variables
//!
//! - `SNAKE_TICK_MS`: Tick interval in milliseconds (default: 140)
//! - `SNAKE_SEED`: Seed for food placement (default: derived from the clock)
//! - `SNAKE_LOG_PATH`: Log file path; logging is disabled when unset
//! - `SNAKE_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace` (default: info)

pub mod config;
pub mod controller;
pub mod ticker;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use config::GameConfig;
pub use controller::Controller;
pub use ticker::Ticker;
