use std::collections::HashSet;

use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a uniformly random cell outside `occupied`.
///
/// Returns `None` when every cell of the grid is occupied.
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    occupied: &HashSet<Position>,
) -> Option<Position> {
    let candidates: Vec<Position> = bounds
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

/// Spawns food anywhere the snake is not.
#[must_use]
pub fn spawn_food_around<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let occupied: HashSet<Position> = snake.segments().copied().collect();
    spawn_food(rng, bounds, &occupied)
}
