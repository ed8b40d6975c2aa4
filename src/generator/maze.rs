/*
maze.rs

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

//! Full-resolution maze drawn from the spanning tree.
//!
//! A grid of `R` x `C` nodes becomes a `(2R - 1)` x `(2C - 1)` maze. Cells with two even
//! coordinates are nodes, cells with two odd coordinates are junctions, and the remaining cells
//! sit between two nodes. Wall grid cell `(r, c)` maps to the junction `(2r + 1, 2c + 1)`.

use log::{Level, debug, log_enabled};
use std::num::NonZeroUsize;

use super::walls::{WallCell, WallGrid};

/// Content of a maze cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Wall.
    Impassable,

    /// Open space between nodes.
    Filler,

    /// Node, with its position in the cycle once the tracer has visited it.
    Node(Option<NonZeroUsize>),
}

/// Full-resolution maze.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    rows: usize,
    cols: usize,

    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Maze {
    /// Create an empty maze for a grid of `node_rows` x `node_cols` nodes: no walls except the
    /// junctions.
    pub fn new(node_rows: usize, node_cols: usize) -> Self {
        let rows: usize = (2 * node_rows).saturating_sub(1);
        let cols: usize = (2 * node_cols).saturating_sub(1);
        let mut cells: Vec<Cell> = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(match (row % 2, col % 2) {
                    (0, 0) => Cell::Node(None),
                    (1, 1) => Cell::Impassable,
                    _ => Cell::Filler,
                });
            }
        }
        Self { rows, cols, cells }
    }

    /// Draw the walls that are still present in the wall grid.
    pub fn from_walls(walls: &WallGrid) -> Self {
        let mut maze: Maze = Self::new(walls.rows() + 1, walls.cols() + 1);

        for row in 0..walls.rows() {
            for col in 0..walls.cols() {
                let junction: (usize, usize) = (2 * row + 1, 2 * col + 1);
                match walls.get((row, col)) {
                    WallCell::Post => maze.set(junction, Cell::Impassable),
                    WallCell::Edge(_) => {
                        if row % 2 == 1 {
                            maze.set((junction.0 - 1, junction.1), Cell::Impassable);
                            maze.set((junction.0 + 1, junction.1), Cell::Impassable);
                        } else {
                            maze.set((junction.0, junction.1 - 1), Cell::Impassable);
                            maze.set((junction.0, junction.1 + 1), Cell::Impassable);
                        }
                    }
                    WallCell::Removed | WallCell::NoEdge => (),
                }
            }
        }

        // Junctions left between open passages would break the corridor the tracer follows.
        // Posts stay: a lone post is the whole tree of a 2x2 grid.
        for row in 1..maze.rows.saturating_sub(1) {
            for col in 1..maze.cols.saturating_sub(1) {
                if matches!(maze.get((row, col)), Cell::Node(_)) {
                    continue;
                }
                if row % 4 == 1 && col % 4 == 1 {
                    continue;
                }
                if maze.get((row - 1, col)) == Cell::Filler
                    && maze.get((row + 1, col)) == Cell::Filler
                    && maze.get((row, col - 1)) == Cell::Filler
                    && maze.get((row, col + 1)) == Cell::Filler
                {
                    maze.set((row, col), Cell::Filler);
                }
            }
        }
        maze
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of node rows.
    pub fn node_rows(&self) -> usize {
        self.rows.div_ceil(2)
    }

    /// Number of node columns.
    pub fn node_cols(&self) -> usize {
        self.cols.div_ceil(2)
    }

    /// Number of node cells.
    pub fn num_nodes(&self) -> usize {
        self.node_rows() * self.node_cols()
    }

    /// Get the cell at the given position. Positions outside the maze are
    /// [`Cell::Impassable`].
    pub fn get(&self, position: (usize, usize)) -> Cell {
        let (row, col) = position;
        if row >= self.rows || col >= self.cols {
            Cell::Impassable
        } else {
            self.cells[row * self.cols + col]
        }
    }

    /// Set the cell at the given position. Positions outside the maze are ignored.
    pub fn set(&mut self, position: (usize, usize), cell: Cell) {
        let (row, col) = position;
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = cell;
        }
    }

    /// Print the maze.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        debug!("Maze {}x{}", self.rows, self.cols);
        let mut s: String = String::new();
        for row in 0..self.rows {
            s.clear();
            for col in 0..self.cols {
                match self.get((row, col)) {
                    Cell::Impassable => s.push_str("###"),
                    Cell::Filler => s.push_str("   "),
                    Cell::Node(None) => s.push_str(" o "),
                    Cell::Node(Some(n)) => s.push_str(&format!("{n:^3}")),
                }
            }
            debug!("{s}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impassable(maze: &Maze) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..maze.rows() {
            for col in 0..maze.cols() {
                if maze.get((row, col)) == Cell::Impassable {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn new_lays_out_cells_by_parity() {
        let maze = Maze::new(2, 3);
        assert_eq!((maze.rows(), maze.cols()), (3, 5));
        assert_eq!((maze.node_rows(), maze.node_cols()), (2, 3));
        assert_eq!(maze.num_nodes(), 6);
        assert_eq!(maze.get((0, 0)), Cell::Node(None));
        assert_eq!(maze.get((0, 1)), Cell::Filler);
        assert_eq!(maze.get((1, 0)), Cell::Filler);
        assert_eq!(maze.get((1, 1)), Cell::Impassable);
        assert_eq!(maze.get((3, 0)), Cell::Impassable);
    }

    #[test]
    fn lone_post_is_kept() {
        let maze = Maze::from_walls(&WallGrid::new(2, 2));
        assert_eq!(impassable(&maze), vec![(1, 1)]);
    }

    #[test]
    fn walls_are_drawn_through_their_junction() {
        // Posts (0,0) and (0,2) joined, (2,0) joined to (0,0), (2,2) joined to (2,0)
        let mut walls = WallGrid::new(4, 4);
        walls.remove_edge((1, 2));
        let maze = Maze::from_walls(&walls);
        assert_eq!((maze.rows(), maze.cols()), (7, 7));

        let expected = vec![
            (1, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 1),
            (3, 1),
            (4, 1),
            (5, 1),
            (5, 2),
            (5, 3),
            (5, 4),
            (5, 5),
        ];
        assert_eq!(impassable(&maze), expected);
    }

    #[test]
    fn removed_walls_leave_no_remnants() {
        let mut walls = WallGrid::new(4, 6);
        walls.remove_edge((0, 1));
        walls.remove_edge((2, 3));
        walls.remove_edge((1, 4));
        let maze = Maze::from_walls(&walls);
        // Junctions of removed edges and between posts are open
        assert_eq!(maze.get((1, 3)), Cell::Filler);
        assert_eq!(maze.get((5, 7)), Cell::Filler);
        assert_eq!(maze.get((3, 9)), Cell::Filler);
        assert_eq!(maze.get((3, 3)), Cell::Filler);
        assert_eq!(maze.get((3, 7)), Cell::Filler);
        // Posts and kept edges are walls
        assert_eq!(maze.get((1, 1)), Cell::Impassable);
        assert_eq!(maze.get((3, 1)), Cell::Impassable);
        assert_eq!(maze.get((1, 7)), Cell::Impassable);
    }
}
