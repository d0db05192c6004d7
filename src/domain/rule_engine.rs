//! Generation advance for Conway's Game of Life on a bounded board.
//!
//! The scan reads only from the current grid and collects into a separate
//! buffer, so no cell ever sees a neighbor that was already updated.

use super::{Cell, Grid};

/// Count live cells among the up-to-8 neighbors of (x, y).
/// Positions off the board count as dead.
fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (x, y) = (x as isize, y as isize);

    (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter(|&(dx, dy)| grid.is_alive_at(x + dx, y + dy))
        .count() as u8
}

/// Compute the next generation. Pure: the input is never modified.
pub fn next_generation(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();

    let cells: Vec<Cell> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| {
            let current = Cell::from(grid.is_alive_at(x as isize, y as isize));
            current.evolve(count_live_neighbors(grid, x, y))
        })
        .collect();

    grid.with_cells(cells)
}
