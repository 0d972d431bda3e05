//! Game state module - the snake, its food and the tick transition
//!
//! A tick never mutates the state it is given: [`transition`] builds the next
//! state from the previous one, so every intermediate state can be kept and
//! compared. Input setters only touch the pending direction and the pause flag.

use crate::food::place_food;
use crate::rng::RandomSource;
use crate::types::*;

/// What happened on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Paused or already over; nothing changed.
    Idle,
    Moved,
    Ate,
    HitWall,
    HitSelf,
}

impl TickEvent {
    /// Whether this tick ended the game
    pub fn is_fatal(&self) -> bool {
        matches!(self, TickEvent::HitWall | TickEvent::HitSelf)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TickEvent::Idle => "idle",
            TickEvent::Moved => "moved",
            TickEvent::Ate => "ate",
            TickEvent::HitWall => "hit_wall",
            TickEvent::HitSelf => "hit_self",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Body segments, head first.
    pub snake: Vec<Cell>,
    /// Heading applied on the last tick.
    pub direction: Direction,
    /// Requested heading, validated lazily on the next tick.
    pub pending_direction: Direction,
    pub food: Option<Cell>,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
}

impl GameState {
    /// Fresh game: a length-3 snake centred on the board heading right.
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mid = (GRID_SIZE / 2) as i8;
        let snake: Vec<Cell> = (0..INITIAL_SNAKE_LEN as i8)
            .map(|i| Cell::new(mid + 1 - i, mid))
            .collect();
        let food = place_food(&snake, rng);

        Self {
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food,
            score: 0,
            game_over: false,
            paused: false,
        }
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    pub fn status(&self) -> Status {
        Status::from_flags(self.game_over, self.paused)
    }

    /// Request a new heading for the next tick.
    ///
    /// Reversals are not rejected here; the tick discards them.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.pending_direction = direction;
    }

    /// String entry point for [`Self::set_pending_direction`]; unknown names are ignored.
    pub fn set_pending_direction_str(&mut self, name: &str) {
        if let Some(direction) = Direction::from_str(name) {
            self.pending_direction = direction;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Focus lost: pause unless the game is already over.
    pub fn blur(&mut self) {
        if !self.game_over {
            self.paused = true;
        }
    }

    /// Next state after one tick. See [`transition`].
    pub fn step<R: RandomSource + ?Sized>(&self, rng: &mut R) -> GameState {
        transition(self, rng)
    }

    fn ended(&self, direction: Direction) -> GameState {
        GameState {
            game_over: true,
            direction,
            ..self.clone()
        }
    }
}

/// Advance the game by one tick.
pub fn transition<R: RandomSource + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    transition_with_event(state, rng).0
}

/// [`transition`], also reporting what happened.
pub fn transition_with_event<R: RandomSource + ?Sized>(
    state: &GameState,
    rng: &mut R,
) -> (GameState, TickEvent) {
    if state.game_over || state.paused {
        return (state.clone(), TickEvent::Idle);
    }

    let direction = state.direction.resolve(state.pending_direction);
    let Some(head) = state.head() else {
        return (state.clone(), TickEvent::Idle);
    };
    let next = head.step(direction);

    if !next.in_bounds() {
        return (state.ended(direction), TickEvent::HitWall);
    }

    // Checked against the pre-move body, tail included.
    if state.occupies(next) {
        return (state.ended(direction), TickEvent::HitSelf);
    }

    let ate = state.food == Some(next);

    let mut snake = Vec::with_capacity(state.snake.len() + 1);
    snake.push(next);
    snake.extend_from_slice(&state.snake);

    let (food, score, event) = if ate {
        let food = place_food(&snake, rng);
        (food, state.score.saturating_add(1), TickEvent::Ate)
    } else {
        snake.pop();
        (state.food, state.score, TickEvent::Moved)
    };

    let next_state = GameState {
        snake,
        direction,
        pending_direction: state.pending_direction,
        food,
        score,
        game_over: false,
        paused: false,
    };
    (next_state, event)
}
