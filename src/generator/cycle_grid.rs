/*
cycle_grid.rs

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

//! Final cycle-order grid.

use serde::{Deserialize, Deserializer, Serialize, de};

use super::direction::Direction;
use super::maze::{Cell, Maze};

/// Reasons for a grid not to describe a Hamiltonian cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CycleError {
    /// The number of values does not match the dimensions.
    #[error("{found} values for a {rows}x{cols} grid")]
    WrongSize {
        rows: usize,
        cols: usize,
        found: usize,
    },

    /// A value is missing, duplicated, or out of range.
    #[error("value {0} does not appear exactly once")]
    NotABijection(usize),

    /// Two consecutive values are not on adjacent nodes.
    #[error("values {value} and {next} are not on adjacent nodes")]
    NotAdjacent { value: usize, next: usize },
}

/// Position of every node in the Hamiltonian cycle, from 1 to `rows * cols`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CycleGrid {
    rows: usize,
    cols: usize,

    /// Values in row-major order.
    values: Vec<usize>,
}

/// Serialized form of a [`CycleGrid`], before validation.
#[derive(Deserialize)]
struct RawCycleGrid {
    rows: usize,
    cols: usize,
    values: Vec<usize>,
}

/// Deserialize a [`CycleGrid`] and reject grids that are not Hamiltonian cycles.
impl<'de> Deserialize<'de> for CycleGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: RawCycleGrid = RawCycleGrid::deserialize(deserializer)?;
        CycleGrid::from_values(raw.rows, raw.cols, raw.values).map_err(de::Error::custom)
    }
}

impl CycleGrid {
    /// Keep only the node cells of a numbered maze.
    pub fn compact(maze: &Maze) -> Self {
        let rows: usize = maze.node_rows();
        let cols: usize = maze.node_cols();
        let mut values: Vec<usize> = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                values.push(match maze.get((2 * row, 2 * col)) {
                    Cell::Node(Some(value)) => value.get(),
                    _ => 0,
                });
            }
        }
        Self { rows, cols, values }
    }

    /// Build a grid from row-major values.
    ///
    /// # Errors
    ///
    /// The method returns an error if the values do not describe a Hamiltonian cycle.
    pub fn from_values(rows: usize, cols: usize, values: Vec<usize>) -> Result<Self, CycleError> {
        let grid: CycleGrid = Self { rows, cols, values };
        grid.validate()?;
        Ok(grid)
    }

    /// Number of node rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of node columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of nodes in the cycle.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in row-major order.
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Cycle position of the node, or [`None`] outside the grid.
    pub fn get(&self, position: (usize, usize)) -> Option<usize> {
        let (row, col) = position;
        if row >= self.rows || col >= self.cols {
            None
        } else {
            self.values.get(row * self.cols + col).copied()
        }
    }

    /// Node holding the given cycle position (positions start from 1).
    pub fn position_of(&self, value: usize) -> Option<(usize, usize)> {
        self.values
            .iter()
            .position(|v| *v == value)
            .map(|i| (i / self.cols, i % self.cols))
    }

    /// Node coordinates in cycle order.
    ///
    /// Values outside `1..=len` are skipped, so the result is shorter than the grid when the
    /// grid is not valid.
    pub fn order(&self) -> Vec<(usize, usize)> {
        let n: usize = self.values.len();
        let mut order: Vec<Option<(usize, usize)>> = vec![None; n];
        for (i, value) in self.values.iter().enumerate() {
            if (1..=n).contains(value) {
                order[value - 1] = Some((i / self.cols, i % self.cols));
            }
        }
        order.into_iter().flatten().collect()
    }

    /// Verify that every value from 1 to `len` appears once and that consecutive values,
    /// including the last and the first, are on adjacent nodes.
    ///
    /// # Errors
    ///
    /// Return the first problem found.
    pub fn validate(&self) -> Result<(), CycleError> {
        let n: usize = self.rows * self.cols;
        if self.values.len() != n {
            return Err(CycleError::WrongSize {
                rows: self.rows,
                cols: self.cols,
                found: self.values.len(),
            });
        }

        let mut seen: Vec<bool> = vec![false; n];
        for value in &self.values {
            if !(1..=n).contains(value) || seen[value - 1] {
                return Err(CycleError::NotABijection(*value));
            }
            seen[value - 1] = true;
        }

        let order: Vec<(usize, usize)> = self.order();
        for (i, a) in order.iter().enumerate() {
            let b: &(usize, usize) = &order[(i + 1) % n];
            if a.0.abs_diff(b.0) + a.1.abs_diff(b.1) != 1 {
                return Err(CycleError::NotAdjacent {
                    value: i + 1,
                    next: (i + 1) % n + 1,
                });
            }
        }
        Ok(())
    }

    /// Heading from `position` toward the node that follows it in the cycle.
    ///
    /// The node after the last one is the first one. Return [`None`] if the position is outside
    /// the grid or if no neighbor holds the next value.
    pub fn next_direction(&self, position: (usize, usize)) -> Option<Direction> {
        let value: usize = self.get(position)?;
        let next: usize = value % self.len() + 1;
        Direction::ALL.into_iter().find(|direction| {
            direction
                .offset(position, self.rows, self.cols)
                .and_then(|p| self.get(p))
                == Some(next)
        })
    }

    /// Return the grid surrounded by a border of zeros, so that coordinates on a playfield with
    /// a one-cell frame index directly into it.
    pub fn padded(&self) -> Vec<Vec<usize>> {
        let mut rows: Vec<Vec<usize>> = Vec::with_capacity(self.rows + 2);
        rows.push(vec![0; self.cols + 2]);
        for row in self.values.chunks(self.cols.max(1)) {
            let mut r: Vec<usize> = Vec::with_capacity(self.cols + 2);
            r.push(0);
            r.extend_from_slice(row);
            r.push(0);
            rows.push(r);
        }
        rows.push(vec![0; self.cols + 2]);
        rows
    }
}
