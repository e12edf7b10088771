use rand::Rng;

use crate::config::{GridSize, MAX_FOOD_SPAWN_ATTEMPTS};
use crate::snake::{Position, Snake};

/// Picks a uniformly random cell not occupied by `snake`.
///
/// Rejection-samples the whole grid first. If that keeps hitting the body,
/// falls back to one pick over the explicit list of free cells, which is
/// still uniform over the free set.
///
/// # Panics
///
/// Panics when the snake covers every cell of the grid.
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Position {
    for _ in 0..MAX_FOOD_SPAWN_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return candidate;
        }
    }

    let candidates = free_cells(bounds, snake);
    assert!(
        !candidates.is_empty(),
        "spawn_food: no free cells on the board ({}×{})",
        bounds.width,
        bounds.height,
    );

    candidates[rng.gen_range(0..candidates.len())]
}

fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    candidates
}
