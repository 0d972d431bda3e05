//! Controller: owns the single game state and the random source.
//!
//! Input actions and timer ticks both funnel through here; the state is
//! replaced wholesale on every tick.

use log::{debug, info};

use crate::core::{transition_with_event, GameState, RandomSource, SimpleRng, TickEvent};
use crate::types::GameAction;

pub struct Controller<R: RandomSource = SimpleRng> {
    state: GameState,
    rng: R,
    ticks: u64,
}

impl Controller<SimpleRng> {
    /// Controller with a seeded LCG.
    pub fn new(seed: u32) -> Self {
        info!("new game (seed {})", seed);
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Controller<R> {
    pub fn with_rng(mut rng: R) -> Self {
        let state = GameState::new(&mut rng);
        Self {
            state,
            rng,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Ticks since the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick of the game.
    pub fn tick(&mut self) -> TickEvent {
        let (next, event) = transition_with_event(&self.state, &mut self.rng);
        self.state = next;
        if event != TickEvent::Idle {
            self.ticks += 1;
        }

        match event {
            TickEvent::Ate => {
                debug!(
                    "ate food at tick {}: score {}, length {}, next food {:?}",
                    self.ticks,
                    self.state.score,
                    self.state.len(),
                    self.state.food
                );
            }
            TickEvent::HitWall | TickEvent::HitSelf => {
                info!(
                    "game over ({}) after {} ticks, score {}",
                    event.as_str(),
                    self.ticks,
                    self.state.score
                );
            }
            TickEvent::Idle | TickEvent::Moved => {}
        }
        event
    }

    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::Turn(direction) => self.state.set_pending_direction(direction),
            GameAction::TogglePause => {
                self.state.toggle_pause();
                debug!("paused: {}", self.state.paused);
            }
            GameAction::Restart => self.reset(),
            GameAction::Blur => {
                self.state.blur();
                debug!("focus lost, paused: {}", self.state.paused);
            }
        }
    }

    /// Start over from a fresh initial state.
    ///
    /// The random source keeps running, so a restarted game differs from the
    /// first one.
    pub fn reset(&mut self) {
        info!("reset (previous score {})", self.state.score);
        self.state = GameState::new(&mut self.rng);
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedRandom;
    use crate::types::{Cell, Direction};

    #[test]
    fn test_tick_advances_and_counts() {
        let mut ctl = Controller::with_rng(FixedRandom(0.0));
        assert_eq!(ctl.tick(), TickEvent::Moved);
        assert_eq!(ctl.ticks(), 1);
        assert_eq!(ctl.state().head(), Some(Cell::new(12, 10)));
    }

    #[test]
    fn test_turn_only_sets_pending() {
        let mut ctl = Controller::with_rng(FixedRandom(0.0));
        ctl.apply(GameAction::Turn(Direction::Up));
        assert_eq!(ctl.state().pending_direction, Direction::Up);
        assert_eq!(ctl.state().direction, Direction::Right);

        ctl.tick();
        assert_eq!(ctl.state().direction, Direction::Up);
        assert_eq!(ctl.state().head(), Some(Cell::new(11, 9)));
    }

    #[test]
    fn test_paused_ticks_are_idle_and_not_counted() {
        let mut ctl = Controller::with_rng(FixedRandom(0.0));
        ctl.apply(GameAction::TogglePause);
        let before = ctl.state().clone();

        assert_eq!(ctl.tick(), TickEvent::Idle);
        assert_eq!(ctl.ticks(), 0);
        assert_eq!(ctl.state(), &before);

        ctl.apply(GameAction::TogglePause);
        assert_eq!(ctl.tick(), TickEvent::Moved);
    }

    #[test]
    fn test_runs_into_wall_and_freezes() {
        let mut ctl = Controller::with_rng(FixedRandom(0.0));
        // Head starts at x=11; eight moves reach x=19, the ninth leaves the board.
        for _ in 0..8 {
            assert_eq!(ctl.tick(), TickEvent::Moved);
        }
        assert_eq!(ctl.tick(), TickEvent::HitWall);
        assert!(ctl.state().game_over);

        let frozen = ctl.state().clone();
        assert_eq!(ctl.tick(), TickEvent::Idle);
        assert_eq!(ctl.state(), &frozen);

        ctl.apply(GameAction::Blur);
        assert!(!ctl.state().paused);
    }

    #[test]
    fn test_restart_rebuilds_state() {
        let mut ctl = Controller::new(7);
        ctl.apply(GameAction::Turn(Direction::Down));
        ctl.tick();
        ctl.apply(GameAction::Blur);
        assert!(ctl.state().paused);

        ctl.apply(GameAction::Restart);
        let state = ctl.state();
        assert_eq!(ctl.ticks(), 0);
        assert_eq!(state.head(), Some(Cell::new(11, 10)));
        assert_eq!(state.direction, Direction::Right);
        assert!(!state.paused);
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Controller::new(1234);
        let mut b = Controller::new(1234);
        assert_eq!(a.state(), b.state());
        for dir in [Direction::Down, Direction::Left, Direction::Up] {
            a.apply(GameAction::Turn(dir));
            b.apply(GameAction::Turn(dir));
            a.tick();
            b.tick();
            assert_eq!(a.state(), b.state());
        }
    }
}
