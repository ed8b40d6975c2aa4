/*
generator.rs

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

//! Generate random Hamiltonian cycles over a grid of nodes.
//!
//! A cycle is built in two stages:
//!
//! * A random spanning tree is grown over a [`walls::WallGrid`]. Every candidate wall gets a
//!   random weight ([`walls::WallGrid::populate_edges`]), then
//!   [`spanning_tree::build_spanning_tree`] removes walls one post at a time, and uses
//!   [`connectivity::reachable`] to refuse removals that would cut the tree.
//!
//! * The tree is drawn as walls in a full-resolution [`maze::Maze`]
//!   ([`maze::Maze::from_walls`]). A right-hand wall follower ([`tracer::trace`]) walks the
//!   corridor around the tree and numbers the nodes in the order it meets them. The numbered
//!   nodes are collected in a [`cycle_grid::CycleGrid`] ([`cycle_grid::CycleGrid::compact`]).
//!
//! [`hamiltonian::generate`] runs the whole process. If the tracer does not reach every node,
//! the method returns an error, and the generation can be retried.

pub mod connectivity;
pub mod cycle_grid;
pub mod direction;
pub mod hamiltonian;
pub mod maze;
pub mod spanning_tree;
pub mod tracer;
pub mod walls;

pub use cycle_grid::{CycleError, CycleGrid};
pub use direction::Direction;
pub use hamiltonian::{GenerationError, generate};
