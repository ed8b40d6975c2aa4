/*
autopilot.rs

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

//! Drive a snake along a Hamiltonian cycle.
//!
//! On every tick the autopilot looks at the four neighbors of the current node and moves to the
//! one holding the next value of the cycle. The snake never needs anything else from the
//! generator.

use crate::generator::{CycleGrid, Direction};

/// Autopilot following a [`CycleGrid`].
#[derive(Debug, Clone)]
pub struct Autopilot<'a> {
    grid: &'a CycleGrid,

    /// Current node.
    position: (usize, usize),

    /// Number of moves since the start.
    steps: usize,
}

impl<'a> Autopilot<'a> {
    /// Create an [`Autopilot`] object starting on the given node.
    ///
    /// Return [`None`] if the node is outside the grid.
    pub fn new(grid: &'a CycleGrid, start: (usize, usize)) -> Option<Self> {
        grid.get(start)?;
        Some(Self {
            grid,
            position: start,
            steps: 0,
        })
    }

    /// Current node.
    pub fn position(&self) -> (usize, usize) {
        self.position
    }

    /// Number of moves since the start.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Move to the next node of the cycle and return the heading used.
    ///
    /// Return [`None`] and stay in place if the grid is not a valid cycle around the current
    /// node.
    pub fn advance(&mut self) -> Option<Direction> {
        let direction: Direction = self.grid.next_direction(self.position)?;
        self.position =
            direction.offset(self.position, self.grid.rows(), self.grid.cols())?;
        self.steps += 1;
        Some(direction)
    }
}

/// Endless iteration over the nodes of the cycle, starting with the node after the start.
impl Iterator for Autopilot<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|_| self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_square() {
        let grid = CycleGrid::from_values(2, 2, vec![1, 2, 4, 3]).unwrap();
        let mut autopilot = Autopilot::new(&grid, (1, 0)).unwrap();
        assert_eq!(autopilot.advance(), Some(Direction::Up));
        assert_eq!(autopilot.position(), (0, 0));
        let rest: Vec<(usize, usize)> = autopilot.by_ref().take(3).collect();
        assert_eq!(rest, vec![(0, 1), (1, 1), (1, 0)]);
        assert_eq!(autopilot.steps(), 4);
    }

    #[test]
    fn start_outside_the_grid() {
        let grid = CycleGrid::from_values(2, 2, vec![1, 2, 4, 3]).unwrap();
        assert!(Autopilot::new(&grid, (2, 2)).is_none());
    }

    #[test]
    fn stops_on_a_broken_grid() {
        let grid = CycleGrid::compact(&crate::generator::maze::Maze::new(2, 2));
        let mut autopilot = Autopilot::new(&grid, (0, 0)).unwrap();
        assert_eq!(autopilot.next(), None);
        assert_eq!(autopilot.steps(), 0);
    }
}
