//! Food placement.
//!
//! Empty cells are scanned in row-major order so that a given sample always
//! picks the same cell.

use arrayvec::ArrayVec;

use crate::rng::RandomSource;
use crate::types::{Cell, GRID_CELLS, GRID_SIZE};

/// All board cells not covered by `snake`, in row-major order.
pub fn empty_cells(snake: &[Cell]) -> ArrayVec<Cell, GRID_CELLS> {
    let mut occupied = [false; GRID_CELLS];
    for cell in snake.iter().filter(|c| c.in_bounds()) {
        occupied[cell.y as usize * GRID_SIZE as usize + cell.x as usize] = true;
    }

    let mut empty = ArrayVec::new();
    for y in 0..GRID_SIZE as i8 {
        for x in 0..GRID_SIZE as i8 {
            if !occupied[y as usize * GRID_SIZE as usize + x as usize] {
                empty.push(Cell::new(x, y));
            }
        }
    }
    empty
}

/// Pick an empty cell for the next food, or `None` when the board is full.
///
/// Exactly one sample is drawn when at least one cell is empty; none otherwise.
pub fn place_food<R: RandomSource + ?Sized>(snake: &[Cell], rng: &mut R) -> Option<Cell> {
    let empty = empty_cells(snake);
    if empty.is_empty() {
        return None;
    }
    let idx = sample_index(rng.next_unit(), empty.len());
    Some(empty[idx])
}

/// floor(sample * len), clamped onto `0..len`.
fn sample_index(sample: f64, len: usize) -> usize {
    let scaled = (sample * len as f64).floor();
    if scaled.is_nan() || scaled < 0.0 {
        0
    } else {
        (scaled as usize).min(len - 1)
    }
}
