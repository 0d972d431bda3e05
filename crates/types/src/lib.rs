//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (the board is square)
pub const GRID_SIZE: u8 = 20;
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Length of the snake at game start/reset
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Default tick interval (milliseconds)
pub const TICK_MS: u32 = 140;

/// A board coordinate.
///
/// Coordinates are signed: a candidate head may step one cell past the edge
/// before the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Check if the cell lies on the board
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < GRID_SIZE as i8 && self.y < GRID_SIZE as i8
    }

    pub fn manhattan(self, other: Cell) -> u32 {
        (self.x as i32 - other.x as i32).unsigned_abs()
            + (self.y as i32 - other.y as i32).unsigned_abs()
    }
}

/// Direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector (dx, dy); y grows downwards
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Direction actually applied on a tick when `pending` was requested.
    ///
    /// An exact reversal is discarded in favour of the current heading.
    pub fn resolve(&self, pending: Direction) -> Self {
        if self.is_opposite(pending) {
            *self
        } else {
            pending
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions produced by input collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Turn(Direction),
    TogglePause,
    Restart,
    /// The terminal lost focus.
    Blur,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::TogglePause),
            "restart" => Some(GameAction::Restart),
            "blur" => Some(GameAction::Blur),
            other => Direction::from_str(other).map(GameAction::Turn),
        }
    }
}

/// Run status shown to the player, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    GameOver,
    Paused,
    Running,
}

impl Status {
    /// Select the status by priority: game over, then paused, then running.
    pub fn from_flags(game_over: bool, paused: bool) -> Self {
        if game_over {
            Status::GameOver
        } else if paused {
            Status::Paused
        } else {
            Status::Running
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::GameOver => "Game Over",
            Status::Paused => "Paused",
            Status::Running => "Running",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_resolve_discards_reversal() {
        assert_eq!(Direction::Right.resolve(Direction::Left), Direction::Right);
        assert_eq!(Direction::Right.resolve(Direction::Up), Direction::Up);
        assert_eq!(Direction::Down.resolve(Direction::Down), Direction::Down);
    }

    #[test]
    fn test_direction_parse_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
        assert_eq!(Direction::from_str("sideways"), None);
        assert_eq!(Direction::from_str(""), None);
    }

    #[test]
    fn test_cell_step_and_bounds() {
        let c = Cell::new(19, 10);
        assert!(c.in_bounds());
        assert_eq!(c.step(Direction::Right), Cell::new(20, 10));
        assert!(!c.step(Direction::Right).in_bounds());
        assert!(!Cell::new(0, 0).step(Direction::Up).in_bounds());
        assert_eq!(c.manhattan(c.step(Direction::Down)), 1);
    }

    #[test]
    fn test_status_priority() {
        assert_eq!(Status::from_flags(true, true), Status::GameOver);
        assert_eq!(Status::from_flags(false, true), Status::Paused);
        assert_eq!(Status::from_flags(false, false), Status::Running);
        assert_eq!(Status::GameOver.label(), "Game Over");
    }

    #[test]
    fn test_action_parse() {
        assert_eq!(
            GameAction::from_str("Up"),
            Some(GameAction::Turn(Direction::Up))
        );
        assert_eq!(GameAction::from_str("pause"), Some(GameAction::TogglePause));
        assert_eq!(GameAction::from_str("jump"), None);
    }
}
