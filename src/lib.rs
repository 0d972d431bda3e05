//! TUI Snake (workspace facade crate).
//!
//! Re-exports the member crates as `tui_snake::{core,engine,input,term,types}`
//! and hosts the pieces only the binary needs: log setup and the headless
//! trace runner.

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub mod logging;
pub mod trace;
