//! Status text shown next to the board.

use crate::game_state::GameState;
use crate::types::Status;

/// Text the UI shows for a state: score, status label, pause button label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusText {
    pub score: String,
    pub status: &'static str,
    pub pause_label: &'static str,
}

impl StatusText {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score.to_string(),
            status: Status::from_flags(state.game_over, state.paused).label(),
            pause_label: pause_label(state.paused),
        }
    }
}

/// Label of the pause control: what pressing it would do.
pub fn pause_label(paused: bool) -> &'static str {
    if paused {
        "Resume"
    } else {
        "Pause"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedRandom;

    #[test]
    fn test_running_text() {
        let mut state = GameState::new(&mut FixedRandom(0.0));
        state.score = 42;

        let text = StatusText::from_state(&state);
        assert_eq!(text.score, "42");
        assert_eq!(text.status, "Running");
        assert_eq!(text.pause_label, "Pause");
    }

    #[test]
    fn test_game_over_beats_paused() {
        let mut state = GameState::new(&mut FixedRandom(0.0));
        state.paused = true;
        assert_eq!(StatusText::from_state(&state).status, "Paused");
        assert_eq!(StatusText::from_state(&state).pause_label, "Resume");

        state.game_over = true;
        let text = StatusText::from_state(&state);
        assert_eq!(text.status, "Game Over");
        assert_eq!(text.pause_label, "Resume");
    }
}
