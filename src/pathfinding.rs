//! Breadth-first shortest path search.
//!
//! This module contains the pathfinding algorithm used to solve mazes. The search treats every
//! open cell as a node with unit-cost edges to its four axis-aligned neighbours, so the first time
//! the goal leaves the frontier the route that reached it is a shortest one.

use std::collections::VecDeque;

use log::debug;

use crate::{
    error::GridError,
    grid::Grid,
    types::{Coordinate, Direction, Path},
};

/// Finds a shortest path from `start` to `goal` through cells that are not `wall`.
///
/// The returned path starts with `start` and ends with `goal`, and every step moves one cell up,
/// right, down or left. Neighbours are explored in that order, which makes the result
/// deterministic when several shortest paths exist. An empty path means `goal` cannot be reached.
///
/// A `start` that is itself a wall is still searched from. A `goal` that is a wall is never
/// entered, so it is only reachable when it equals `start`.
///
/// # Errors
///
/// This function returns [`GridError::OutOfBounds`] if `start` or `goal` lies outside the grid.
pub fn find_path<T: PartialEq>(
    grid: &Grid<T>,
    wall: &T,
    start: Coordinate,
    goal: Coordinate,
) -> Result<Path, GridError> {
    let start_index = grid.checked_index(start)?;
    let _ = grid.checked_index(goal)?;

    debug!(
        "searching {}x{} grid for a path from {start} to {goal}",
        grid.width(),
        grid.height()
    );

    let mut visited = vec![false; grid.len()];
    let mut previous: Vec<Option<Coordinate>> = vec![None; grid.len()];
    let mut frontier = VecDeque::from([start]);

    if let Some(cell) = visited.get_mut(start_index) {
        *cell = true;
    }

    let mut expanded = 0_usize;
    while let Some(current) = frontier.pop_front() {
        if current == goal {
            let path = reconstruct(grid, &previous, current);
            debug!(
                "found a {}-step path after expanding {expanded} cells",
                path.len() - 1
            );
            return Ok(path);
        }
        expanded += 1;

        for direction in Direction::ALL {
            let Some(next) = current.step(direction) else {
                continue;
            };
            if !grid.is_open(next, wall) {
                continue;
            }
            let Some(index) = grid.index(next) else {
                continue;
            };

            let Some(seen) = visited.get_mut(index) else {
                continue;
            };
            if *seen {
                continue;
            }

            *seen = true;
            if let Some(slot) = previous.get_mut(index) {
                *slot = Some(current);
            }
            frontier.push_back(next);
        }
    }

    debug!("frontier exhausted after expanding {expanded} cells; {goal} is unreachable from {start}");

    Ok(Vec::new())
}

/// Walks the predecessor map back from `end` and returns the path in forward order.
fn reconstruct<T>(grid: &Grid<T>, previous: &[Option<Coordinate>], end: Coordinate) -> Path {
    let mut path = vec![end];

    let mut current = end;
    while let Some(prior) = grid
        .index(current)
        .and_then(|index| previous.get(index).copied().flatten())
    {
        path.push(prior);
        current = prior;
    }

    path.reverse();
    path
}
