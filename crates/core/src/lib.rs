//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules and state transitions. It has
//! **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same random source produces identical games
//! - **Testable**: Every tick yields a fresh state value that can be compared
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: Snake, food, score and the tick transition
//! - [`food`]: Food placement over the empty cells
//! - [`rng`]: Injectable random sources and a seeded LCG
//! - [`status`]: Score/status/pause text for the UI
//!
//! # Game Rules
//!
//! - The board is 20x20; the snake starts with 3 cells in the middle heading right
//! - A requested reversal is ignored on the next tick
//! - Leaving the board or touching the body (tail included) ends the game
//! - Eating grows the snake by one cell and scores one point
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{transition, FixedRandom, GameState};
//! use tui_snake_types::{Cell, Direction};
//!
//! let mut rng = FixedRandom(0.0);
//! let mut game = GameState::new(&mut rng);
//! game.set_pending_direction(Direction::Down);
//!
//! let next = transition(&game, &mut rng);
//! assert_eq!(next.head(), Some(Cell::new(11, 11)));
//! assert_eq!(next.score, 0);
//! ```

pub mod food;
pub mod game_state;
pub mod rng;
pub mod status;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::{empty_cells, place_food};
pub use game_state::{transition, transition_with_event, GameState, TickEvent};
pub use rng::{FixedRandom, RandomSource, SequenceRandom, SimpleRng};
pub use status::{pause_label, StatusText};
