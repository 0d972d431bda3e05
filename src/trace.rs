//! Headless trace runner.
//!
//! Plays a seeded game from a move script without touching the terminal and
//! writes every state as one JSON object per line.
//!
//! # Script
//!
//! One character is consumed before each tick:
//!
//! - `u`/`w` up, `d`/`s` down, `l`/`a` left, `r` right
//! - `p` toggles pause
//! - anything else (conventionally `.`) sends nothing
//!
//! Once the script runs out, ticks continue without input.
//!
//! ```text
//! $ tui-snake --seed 7 trace --ticks 3 --moves d
//! {"tick":0,"snake":[[11,10],[10,10],[9,10]],"direction":"right",...}
//! {"tick":1,"snake":[[11,11],[11,10],[10,10]],"direction":"down",...}
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{GameState, StatusText};
use crate::engine::Controller;
use crate::types::{Cell, Direction, GameAction};

/// One serialized game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceFrame {
    pub tick: u64,
    pub snake: Vec<[i8; 2]>,
    pub direction: String,
    pub pending_direction: String,
    pub food: Option<[i8; 2]>,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    pub status: String,
}

fn pair(cell: Cell) -> [i8; 2] {
    [cell.x, cell.y]
}

impl TraceFrame {
    pub fn from_state(tick: u64, state: &GameState) -> Self {
        Self {
            tick,
            snake: state.snake.iter().copied().map(pair).collect(),
            direction: state.direction.as_str().to_string(),
            pending_direction: state.pending_direction.as_str().to_string(),
            food: state.food.map(pair),
            score: state.score,
            game_over: state.game_over,
            paused: state.paused,
            status: StatusText::from_state(state).status.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    pub seed: u32,
    /// Upper bound on ticks run.
    pub ticks: u64,
    pub moves: String,
}

/// How a trace run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSummary {
    pub ticks: u64,
    pub score: u32,
    pub game_over: bool,
}

/// Action for one script character.
pub fn script_action(ch: char) -> Option<GameAction> {
    match ch.to_ascii_lowercase() {
        'u' | 'w' => Some(GameAction::Turn(Direction::Up)),
        'd' | 's' => Some(GameAction::Turn(Direction::Down)),
        'l' | 'a' => Some(GameAction::Turn(Direction::Left)),
        'r' => Some(GameAction::Turn(Direction::Right)),
        'p' => Some(GameAction::TogglePause),
        _ => None,
    }
}

fn write_frame<W: Write>(out: &mut W, tick: u64, state: &GameState) -> Result<()> {
    let frame = TraceFrame::from_state(tick, state);
    serde_json::to_writer(&mut *out, &frame).context("failed to encode trace frame")?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Run the scripted game, writing the initial state and then one frame per tick.
pub fn run_trace<W: Write>(config: &TraceConfig, out: &mut W) -> Result<TraceSummary> {
    let mut controller = Controller::new(config.seed);
    let mut script = config.moves.chars();

    write_frame(out, 0, controller.state())?;

    let mut tick = 0;
    while tick < config.ticks && !controller.state().game_over {
        if let Some(action) = script.next().and_then(script_action) {
            controller.apply(action);
        }
        controller.tick();
        tick += 1;
        write_frame(out, tick, controller.state())?;
    }
    out.flush()?;

    let state = controller.state();
    Ok(TraceSummary {
        ticks: tick,
        score: state.score,
        game_over: state.game_over,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_characters() {
        assert_eq!(script_action('U'), Some(GameAction::Turn(Direction::Up)));
        assert_eq!(script_action('s'), Some(GameAction::Turn(Direction::Down)));
        assert_eq!(script_action('a'), Some(GameAction::Turn(Direction::Left)));
        assert_eq!(script_action('r'), Some(GameAction::Turn(Direction::Right)));
        assert_eq!(script_action('p'), Some(GameAction::TogglePause));
        assert_eq!(script_action('.'), None);
    }

    #[test]
    fn test_frame_from_initial_state() {
        let controller = Controller::new(3);
        let frame = TraceFrame::from_state(0, controller.state());
        assert_eq!(frame.snake, vec![[11, 10], [10, 10], [9, 10]]);
        assert_eq!(frame.direction, "right");
        assert_eq!(frame.status, "Running");
        assert!(frame.food.is_some());
    }
}
