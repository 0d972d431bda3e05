//! Fixed-interval tick scheduler.
//!
//! Models the repeating game timer. Time is passed in by the caller so the
//! schedule can be driven from tests without sleeping.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl Ticker {
    /// A stopped ticker.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Start ticking; the first tick is due one interval after `now`.
    /// Starting a running ticker does nothing.
    pub fn start(&mut self, now: Instant) {
        if self.last_tick.is_none() {
            self.last_tick = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    /// Time left until the next tick (zero when overdue).
    ///
    /// A stopped ticker reports a full interval so input polling keeps cycling.
    pub fn timeout(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self
                .interval
                .checked_sub(now.saturating_duration_since(last))
                .unwrap_or(Duration::ZERO),
            None => self.interval,
        }
    }

    /// Returns true and re-arms if a tick is due at `now`.
    ///
    /// Missed intervals are not replayed: at most one tick fires per call.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.last_tick = Some(now);
                true
            }
            _ => false,
        }
    }
}
