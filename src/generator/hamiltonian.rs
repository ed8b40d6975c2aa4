/*
hamiltonian.rs

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

//! Generate a random Hamiltonian cycle.

use log::debug;
use rand::Rng;
use std::time::Instant;

use super::cycle_grid::CycleGrid;
use super::maze::Maze;
use super::spanning_tree;
use super::tracer;
use super::walls::WallGrid;

/// Smallest number of node rows or columns.
pub const MIN_SIDE: usize = 2;

/// Type of errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Fewer than two rows or columns.
    #[error("a {rows}x{cols} grid is too small, it needs at least 2x2 nodes")]
    TooSmall { rows: usize, cols: usize },

    /// The wall follower needs one spanning tree post per 2x2 block of nodes.
    #[error("a {rows}x{cols} grid cannot be covered, both sides must be even")]
    OddDimension { rows: usize, cols: usize },

    /// The tracer did not reach every node. The maze is malformed; the generation can be
    /// retried with new weights.
    #[error("the tracer numbered {numbered} nodes out of {expected}")]
    Incomplete { numbered: usize, expected: usize },
}

impl GenerationError {
    /// Whether a new attempt with fresh random weights can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::Incomplete { .. })
    }
}

/// Verify that a grid of `node_rows` x `node_cols` nodes can hold a cycle.
///
/// # Errors
///
/// The method returns [`GenerationError::TooSmall`] or [`GenerationError::OddDimension`].
pub fn check_dimensions(node_rows: usize, node_cols: usize) -> Result<(), GenerationError> {
    if node_rows < MIN_SIDE || node_cols < MIN_SIDE {
        return Err(GenerationError::TooSmall {
            rows: node_rows,
            cols: node_cols,
        });
    }
    if node_rows % 2 == 1 || node_cols % 2 == 1 {
        return Err(GenerationError::OddDimension {
            rows: node_rows,
            cols: node_cols,
        });
    }
    Ok(())
}

/// Generate a random Hamiltonian cycle over a grid of `node_rows` x `node_cols` nodes.
///
/// The same seeded random source gives the same cycle.
///
/// # Errors
///
/// The method returns an error for invalid dimensions, before building anything, or if the
/// tracer could not number every node. In that later case, the generation can be retried.
pub fn generate<R: Rng>(
    node_rows: usize,
    node_cols: usize,
    rng: &mut R,
) -> Result<CycleGrid, GenerationError> {
    check_dimensions(node_rows, node_cols)?;
    let start: Instant = Instant::now();
    debug!("Generating a cycle over {node_rows}x{node_cols} nodes");

    let mut walls: WallGrid = WallGrid::new(node_rows, node_cols);
    walls.populate_edges(rng);
    spanning_tree::build_spanning_tree(&mut walls);
    walls.debug();

    let mut maze: Maze = Maze::from_walls(&walls);
    let traced: Result<Vec<(usize, usize)>, GenerationError> = tracer::trace(&mut maze);
    maze.debug();
    traced?;

    let grid: CycleGrid = CycleGrid::compact(&maze);
    debug!("Cycle generated in {}s", start.elapsed().as_secs_f32());
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn check_dimensions_rejects_small_and_odd_grids() {
        assert_eq!(
            check_dimensions(1, 4),
            Err(GenerationError::TooSmall { rows: 1, cols: 4 })
        );
        assert_eq!(
            check_dimensions(4, 0),
            Err(GenerationError::TooSmall { rows: 4, cols: 0 })
        );
        assert_eq!(
            check_dimensions(3, 4),
            Err(GenerationError::OddDimension { rows: 3, cols: 4 })
        );
        assert_eq!(check_dimensions(2, 2), Ok(()));
        assert_eq!(check_dimensions(28, 48), Ok(()));
    }

    #[test]
    fn only_incomplete_is_retryable() {
        assert!(
            GenerationError::Incomplete {
                numbered: 3,
                expected: 4
            }
            .is_retryable()
        );
        assert!(!GenerationError::TooSmall { rows: 1, cols: 1 }.is_retryable());
        assert!(!GenerationError::OddDimension { rows: 3, cols: 3 }.is_retryable());
    }

    #[test]
    fn generate_two_by_two() {
        let grid = generate(2, 2, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(grid.values(), &[1, 2, 4, 3]);
    }

    #[test]
    fn generate_valid_cycles() {
        let mut rng = StdRng::seed_from_u64(2025);
        for (rows, cols) in [(2, 6), (6, 2), (4, 4), (8, 6), (16, 16)] {
            let grid = generate(rows, cols, &mut rng).unwrap();
            assert_eq!((grid.rows(), grid.cols()), (rows, cols));
            assert_eq!(grid.validate(), Ok(()));
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GenerationError::OddDimension { rows: 3, cols: 4 }.to_string(),
            "a 3x4 grid cannot be covered, both sides must be even"
        );
        assert_eq!(
            GenerationError::Incomplete {
                numbered: 12,
                expected: 16
            }
            .to_string(),
            "the tracer numbered 12 nodes out of 16"
        );
    }
}
