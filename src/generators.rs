use rand::seq::SliceRandom;
use rand_xorshift::XorShiftRng;

use crate::cells::Cartesian2DCoordinate;
use crate::grid::{CellGrid, GridError, NeighbourSmallVec};
use crate::masks::WallMaskGrid;
use crate::units::{Height, Width};

/// One work-stack entry of the depth-first carve: a visited cell plus the
/// neighbours not yet tried from it, in shuffled order.
struct Frame {
    coord: Cartesian2DCoordinate,
    remaining: NeighbourSmallVec,
}

/// Apply the recursive backtracker maze generation algorithm to a grid.
///
/// A randomized depth-first traversal: start at a random cell, repeatedly
/// pick an unvisited neighbour in uniformly shuffled order, carve the shared
/// wall and advance. When a cell runs out of unvisited neighbours the walk
/// backtracks to the previous cell. Every cell is visited exactly once and
/// every carve connects a new cell, so the carved passages form a spanning
/// tree over the grid - a perfect maze with exactly (W*H - 1) carved walls.
///
/// The traversal stack is explicit rather than call recursion, so the longest
/// corridor in a large grid cannot overflow the call stack. The one random
/// source drives the start cell and every shuffle of the run.
pub fn recursive_backtracker(grid: &mut CellGrid, rng: &mut XorShiftRng) {
    let start = grid.random_cell(rng);
    grid.mark_visited(start);

    let mut stack = vec![Frame {
        coord: start,
        remaining: shuffled_neighbours(grid, start, rng),
    }];

    while let Some(frame) = stack.last_mut() {
        let current = frame.coord;

        if let Some((direction, neighbour)) = frame.remaining.pop() {
            if !grid.is_visited(neighbour) {
                grid.carve_wall(current, direction);
                grid.mark_visited(neighbour);
                stack.push(Frame {
                    coord: neighbour,
                    remaining: shuffled_neighbours(grid, neighbour, rng),
                });
            }
        } else {
            // No untried neighbours left - backtrack.
            stack.pop();
        }
    }
}

/// Generate a perfect maze of the given dimensions and flatten it into the
/// wall mask grid handed to external consumers.
///
/// Fails fast with `GridError::InvalidArgument` for a zero dimension; a valid
/// grid always generates successfully and, for a fixed rng seed,
/// deterministically.
pub fn carve_perfect_maze(
    width: Width,
    height: Height,
    rng: &mut XorShiftRng,
) -> Result<WallMaskGrid, GridError> {
    let mut grid = CellGrid::new(width, height)?;
    recursive_backtracker(&mut grid, rng);
    Ok(WallMaskGrid::from_grid(&grid))
}

/// The neighbours of a cell in a fresh uniformly random order (Fisher-Yates
/// via `SliceRandom::shuffle`).
fn shuffled_neighbours(
    grid: &CellGrid,
    coord: Cartesian2DCoordinate,
    rng: &mut XorShiftRng,
) -> NeighbourSmallVec {
    let mut neighbours = grid.neighbours(coord);
    neighbours.shuffle(rng);
    neighbours
}
