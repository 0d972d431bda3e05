//! File logging.
//!
//! The terminal belongs to the game while it runs, so log records go to the
//! file named by `SNAKE_LOG_PATH` and nowhere else.

use std::fs::File;

use anyhow::{Context, Result};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::engine::GameConfig;

/// Parse a level name, defaulting to `Info` for anything unrecognised.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Install the file logger if a log path is configured.
///
/// Returns whether a logger was installed.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file =
        File::create(path).with_context(|| format!("failed to create log file {}", path))?;
    WriteLogger::init(parse_level(&config.log_level), Config::default(), file)
        .context("failed to install logger")?;

    info!("logging to {} at {}", path, config.log_level);
    Ok(true)
}
