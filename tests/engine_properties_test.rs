//! Tick invariants checked over scripted scenarios and long random walks.

use tui_snake::core::{
    place_food, transition, transition_with_event, FixedRandom, GameState, SequenceRandom,
    SimpleRng, TickEvent,
};
use tui_snake::types::{Cell, Direction, GRID_SIZE};

fn cells(pairs: &[(i8, i8)]) -> Vec<Cell> {
    pairs.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

fn heading_right(snake: &[(i8, i8)], food: Option<(i8, i8)>) -> GameState {
    GameState {
        snake: cells(snake),
        direction: Direction::Right,
        pending_direction: Direction::Right,
        food: food.map(|(x, y)| Cell::new(x, y)),
        score: 0,
        game_over: false,
        paused: false,
    }
}

#[test]
fn initial_state_and_first_tick() {
    let mut rng = SimpleRng::new(2024);
    let state = GameState::new(&mut rng);
    assert_eq!(state.snake, cells(&[(11, 10), (10, 10), (9, 10)]));
    assert_eq!(state.direction, Direction::Right);

    // Keep food out of the way so the tick is a plain move.
    let state = GameState {
        food: Some(Cell::new(0, 0)),
        ..state
    };
    let next = transition(&state, &mut rng);
    assert_eq!(next.snake, cells(&[(12, 10), (11, 10), (10, 10)]));
    assert_eq!(next.score, 0);
    assert!(!next.game_over);
}

#[test]
fn head_at_right_edge_ends_game() {
    let state = heading_right(&[(19, 10), (18, 10), (17, 10)], Some((0, 0)));
    let next = transition(&state, &mut FixedRandom(0.5));
    assert!(next.game_over);
    assert_eq!(next.snake, state.snake);
    assert_eq!(next.score, 0);
}

#[test]
fn body_one_step_ahead_ends_game() {
    // Hook shape: the cell below the head belongs to the body.
    let mut state = heading_right(&[(5, 5), (5, 4), (6, 4), (6, 5), (6, 6), (5, 6)], None);
    state.direction = Direction::Down;
    state.pending_direction = Direction::Down;
    // (5,6) is the tail: it would be vacated by the move, still fatal.
    let (next, event) = transition_with_event(&state, &mut FixedRandom(0.0));
    assert_eq!(event, TickEvent::HitSelf);
    assert!(next.game_over);
    assert_eq!(next.snake, state.snake);

    let mut state = heading_right(&[(5, 5), (4, 5), (4, 6), (5, 6), (6, 6)], None);
    state.pending_direction = Direction::Down;
    let (next, event) = transition_with_event(&state, &mut FixedRandom(0.0));
    assert_eq!(event, TickEvent::HitSelf);
    assert!(next.game_over);
}

#[test]
fn eating_scores_grows_and_replaces_food() {
    let state = heading_right(&[(5, 5), (4, 5), (3, 5)], Some((6, 5)));
    let next = transition(&state, &mut SequenceRandom::new(vec![0.25]));

    assert_eq!(next.score, state.score + 1);
    assert_eq!(next.len(), state.len() + 1);
    let food = next.food.expect("board has room for food");
    assert!(!next.occupies(food));
    assert_ne!(food, Cell::new(6, 5));
}

#[test]
fn paused_or_over_states_are_fixed_points() {
    let base = heading_right(&[(5, 5), (4, 5), (3, 5)], Some((6, 5)));

    let paused = GameState {
        paused: true,
        ..base.clone()
    };
    let over = GameState {
        game_over: true,
        ..base.clone()
    };
    let both = GameState {
        paused: true,
        game_over: true,
        ..base
    };

    for sample in [0.0, 0.5, 0.99] {
        for state in [&paused, &over, &both] {
            assert_eq!(&transition(state, &mut FixedRandom(sample)), state);
        }
    }
}

#[test]
fn reversal_request_never_reverses() {
    for dir in Direction::ALL {
        let mut state = GameState::new(&mut FixedRandom(0.0));
        state.direction = dir;
        state.pending_direction = dir.opposite();
        state.snake = vec![Cell::new(10, 10)];
        let next = transition(&state, &mut FixedRandom(0.0));
        assert_eq!(next.direction, dir);
        assert_eq!(next.head(), Some(Cell::new(10, 10).step(dir)));
    }
}

#[test]
fn random_walks_keep_tick_invariants() {
    for seed in 1..=40u32 {
        let mut food_rng = SimpleRng::new(seed);
        let mut steer = SimpleRng::new(seed.wrapping_mul(7919));
        let mut state = GameState::new(&mut food_rng);

        for _ in 0..2_000 {
            if state.game_over {
                break;
            }
            let pick = (steer.next_u32() % 4) as usize;
            state.set_pending_direction(Direction::ALL[pick]);

            let prev = state.clone();
            let (next, event) = transition_with_event(&prev, &mut food_rng);

            let effective = prev.direction.resolve(prev.pending_direction);
            assert_eq!(next.direction, effective);
            assert!(!prev.direction.is_opposite(next.direction));

            match event {
                TickEvent::Moved => {
                    assert_eq!(next.len(), prev.len());
                    assert_eq!(next.score, prev.score);
                    assert_eq!(next.food, prev.food);
                }
                TickEvent::Ate => {
                    assert_eq!(next.len(), prev.len() + 1);
                    assert_eq!(next.score, prev.score + 1);
                }
                TickEvent::HitWall | TickEvent::HitSelf => {
                    assert!(next.game_over);
                    assert_eq!(next.snake, prev.snake);
                    state = next;
                    continue;
                }
                TickEvent::Idle => unreachable!("live, unpaused state must move"),
            }

            let (old_head, new_head) = (prev.head().unwrap(), next.head().unwrap());
            assert_eq!(old_head.manhattan(new_head), 1);
            assert_eq!(old_head.step(effective), new_head);

            if let Some(food) = next.food {
                assert!(!next.occupies(food), "food on snake at {:?}", food);
            }
            let mut sorted = next.snake.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), next.len(), "snake overlaps itself");

            state = next;
        }
    }
}

#[test]
fn food_placement_is_reproducible() {
    let snake = cells(&[(3, 3), (3, 4), (3, 5)]);
    let a: Vec<_> = {
        let mut rng = SimpleRng::new(11);
        (0..20).map(|_| place_food(&snake, &mut rng)).collect()
    };
    let b: Vec<_> = {
        let mut rng = SimpleRng::new(11);
        (0..20).map(|_| place_food(&snake, &mut rng)).collect()
    };
    assert_eq!(a, b);
    assert!(a
        .iter()
        .flatten()
        .all(|c| c.in_bounds() && c.x < GRID_SIZE as i8 && !snake.contains(c)));
}
