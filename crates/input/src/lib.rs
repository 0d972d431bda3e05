//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and focus events into [`crate::types::GameAction`].
//! Direction keys only request a heading; the tick decides whether it applies.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_event, handle_key_event, should_quit};
