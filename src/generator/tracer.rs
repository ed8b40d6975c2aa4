/*
tracer.rs

Copyright 2025 Hervé Quatremain

This file is part of Hamcycle.

Hamcycle is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hamcycle is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hamcycle. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Right-hand wall follower that numbers the nodes of a [`Maze`].
//!
//! The walker starts on node (0,0) facing up, with the first post behind its right hand. At each
//! step it tries to turn right, to go straight, to turn left, and finally to go back. Keeping
//! the right hand on the spanning tree walls, it walks the corridor around the tree and comes
//! back to its starting point after touching every node exactly once.

use log::debug;
use std::num::NonZeroUsize;

use super::direction::Direction;
use super::hamiltonian::GenerationError;
use super::maze::{Cell, Maze};

/// Heading of the walker on node (0,0).
pub const START_HEADING: Direction = Direction::Up;

/// Result of one move of the walker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Step {
    /// New position in the maze.
    pub position: (usize, usize),

    /// New heading.
    pub heading: Direction,

    /// Node coordinates of the destination, if it is a node not numbered yet.
    pub visit: Option<(usize, usize)>,
}

/// Compute the next move of the walker.
///
/// Return [`None`] if the walker is walled in.
pub fn step(position: (usize, usize), heading: Direction, maze: &Maze) -> Option<Step> {
    [
        heading.clockwise(),
        heading,
        heading.counter_clockwise(),
        heading.reverse(),
    ]
    .into_iter()
    .find_map(|candidate| {
        let next: (usize, usize) = candidate.offset(position, maze.rows(), maze.cols())?;
        let visit: Option<(usize, usize)> = match maze.get(next) {
            Cell::Impassable => return None,
            Cell::Node(None) => Some((next.0 / 2, next.1 / 2)),
            Cell::Node(Some(_)) | Cell::Filler => None,
        };
        Some(Step {
            position: next,
            heading: candidate,
            visit,
        })
    })
}

/// Number the nodes of the maze in the order the walker visits them.
///
/// Return the node coordinates in visit order.
///
/// # Errors
///
/// The method returns [`GenerationError::Incomplete`] when some nodes are still not numbered
/// after twice as many steps as there are cells in the maze, or when the walker is walled in.
/// Both mean that the walls do not form a single tree.
pub fn trace(maze: &mut Maze) -> Result<Vec<(usize, usize)>, GenerationError> {
    let expected: usize = maze.num_nodes();
    let budget: usize = 2 * maze.rows() * maze.cols();
    let mut order: Vec<(usize, usize)> = Vec::with_capacity(expected);

    let mut position: (usize, usize) = (0, 0);
    let mut heading: Direction = START_HEADING;
    number(maze, position, &mut order);

    let mut steps: usize = 0;
    while order.len() < expected {
        if steps >= budget {
            debug!("Tracer gave up after {steps} steps");
            return Err(GenerationError::Incomplete {
                numbered: order.len(),
                expected,
            });
        }
        let Some(next) = step(position, heading, maze) else {
            debug!("Tracer walled in at {position:?}");
            return Err(GenerationError::Incomplete {
                numbered: order.len(),
                expected,
            });
        };
        steps += 1;
        position = next.position;
        heading = next.heading;
        if next.visit.is_some() {
            number(maze, position, &mut order);
        }
    }
    debug!("Tracer numbered {expected} nodes in {steps} steps");
    Ok(order)
}

fn number(maze: &mut Maze, position: (usize, usize), order: &mut Vec<(usize, usize)>) {
    let value: NonZeroUsize = NonZeroUsize::MIN.saturating_add(order.len());
    maze.set(position, Cell::Node(Some(value)));
    order.push((position.0 / 2, position.1 / 2));
}
