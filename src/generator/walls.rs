/*
walls.rs

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

//! Weighted wall graph used while building the spanning tree.
//!
//! For a grid of `R` x `C` nodes, the wall grid has `(R - 1)` x `(C - 1)` cells:
//!
//! ```text
//!  P - P - P      P: post, the center of a 2x2 block of nodes (both coordinates even)
//!  |   |   |      - and |: candidate wall between two posts (one odd coordinate)
//!  P - P - P      blank: not an edge (both coordinates odd)
//! ```
//!
//! The edges still present when the spanning tree is finished are drawn as walls in the
//! [`crate::generator::maze::Maze`].

use log::{Level, debug, log_enabled};
use rand::Rng;

/// Smallest random edge weight.
pub const MIN_WEIGHT: u16 = 1;

/// Random edge weights are strictly below this value.
pub const MAX_WEIGHT: u16 = 500;

/// Content of a wall grid cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WallCell {
    /// Tree vertex.
    Post,

    /// Candidate edge between two posts, with its weight.
    Edge(u16),

    /// Edge opened by the spanning tree builder.
    Removed,

    /// Position between four posts; never an edge.
    NoEdge,
}

impl WallCell {
    /// Whether the connectivity search can go through the cell.
    pub fn is_passable(self) -> bool {
        matches!(self, WallCell::Post | WallCell::Edge(_))
    }
}

/// Wall grid.
#[derive(Debug, Clone, PartialEq)]
pub struct WallGrid {
    rows: usize,
    cols: usize,

    /// Cells in row-major order.
    cells: Vec<WallCell>,
}

impl WallGrid {
    /// Create the wall grid for a grid of `node_rows` x `node_cols` nodes.
    ///
    /// Every candidate edge is present with weight [`MIN_WEIGHT`]. Use
    /// [`WallGrid::populate_edges`] to draw random weights.
    pub fn new(node_rows: usize, node_cols: usize) -> Self {
        let rows: usize = node_rows.saturating_sub(1);
        let cols: usize = node_cols.saturating_sub(1);
        let mut cells: Vec<WallCell> = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Self::initial_cell(row, col, MIN_WEIGHT));
            }
        }
        Self { rows, cols, cells }
    }

    fn initial_cell(row: usize, col: usize, weight: u16) -> WallCell {
        match (row % 2, col % 2) {
            (0, 0) => WallCell::Post,
            (1, 1) => WallCell::NoEdge,
            _ => WallCell::Edge(weight),
        }
    }

    /// Give every candidate edge an independent random weight in
    /// `[MIN_WEIGHT, MAX_WEIGHT)` and mark the positions between posts as
    /// [`WallCell::NoEdge`].
    pub fn populate_edges<R: Rng>(&mut self, rng: &mut R) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let weight: u16 = if (row + col) % 2 == 1 {
                    rng.random_range(MIN_WEIGHT..MAX_WEIGHT)
                } else {
                    0
                };
                self.cells[row * self.cols + col] = Self::initial_cell(row, col, weight);
            }
        }
    }

    /// Number of rows in the wall grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the wall grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at the given position. Positions outside the grid are
    /// [`WallCell::NoEdge`].
    pub fn get(&self, position: (usize, usize)) -> WallCell {
        let (row, col) = position;
        if row >= self.rows || col >= self.cols {
            WallCell::NoEdge
        } else {
            self.cells[row * self.cols + col]
        }
    }

    /// Set the cell at the given position. Positions outside the grid are ignored.
    pub fn set(&mut self, position: (usize, usize), cell: WallCell) {
        let (row, col) = position;
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = cell;
        }
    }

    /// Open the edge at the given position.
    ///
    /// Return the weight of the edge, or [`None`] if there is no edge to remove.
    pub fn remove_edge(&mut self, position: (usize, usize)) -> Option<u16> {
        match self.get(position) {
            WallCell::Edge(weight) => {
                self.set(position, WallCell::Removed);
                Some(weight)
            }
            _ => None,
        }
    }

    /// Return the two posts joined by the edge at the given position, lowest coordinates first.
    pub fn edge_endpoints(
        &self,
        position: (usize, usize),
    ) -> Option<((usize, usize), (usize, usize))> {
        let (row, col) = position;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        match (row % 2, col % 2) {
            (1, 0) => Some(((row - 1, col), (row + 1, col))),
            (0, 1) => Some(((row, col - 1), (row, col + 1))),
            _ => None,
        }
    }

    /// Number of posts (tree vertexes).
    pub fn num_posts(&self) -> usize {
        self.rows.div_ceil(2) * self.cols.div_ceil(2)
    }

    /// Number of edges still present.
    pub fn num_edges(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, WallCell::Edge(_)))
            .count()
    }

    /// Whether the present edges form a spanning tree of the posts.
    ///
    /// Exhaustive flood fill from post (0,0), independent from the connectivity oracle used
    /// while the tree is built.
    pub fn is_spanning_tree(&self) -> bool {
        if self.rows == 0 || self.cols == 0 {
            return false;
        }
        let mut seen: Vec<bool> = vec![false; self.rows * self.cols];
        let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
        seen[0] = true;
        let mut posts: usize = 0;

        while let Some((row, col)) = stack.pop() {
            if self.get((row, col)) == WallCell::Post {
                posts += 1;
            }
            let mut neighbors: Vec<(usize, usize)> = Vec::with_capacity(4);
            if row > 0 {
                neighbors.push((row - 1, col));
            }
            if col > 0 {
                neighbors.push((row, col - 1));
            }
            neighbors.push((row + 1, col));
            neighbors.push((row, col + 1));
            for (r, c) in neighbors {
                if self.get((r, c)).is_passable() && !seen[r * self.cols + c] {
                    seen[r * self.cols + c] = true;
                    stack.push((r, c));
                }
            }
        }
        posts == self.num_posts() && self.num_edges() + 1 == posts
    }

    /// Print the wall grid.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        debug!("Wall grid {}x{}", self.rows, self.cols);
        let mut s: String = String::new();
        for row in 0..self.rows {
            s.clear();
            for col in 0..self.cols {
                match self.get((row, col)) {
                    WallCell::Post => s.push_str("  + "),
                    WallCell::Edge(weight) => s.push_str(&format!("{weight:^4}")),
                    WallCell::Removed => s.push_str("  . "),
                    WallCell::NoEdge => s.push_str("    "),
                }
            }
            debug!("{s}");
        }
    }
}
