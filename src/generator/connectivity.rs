/*
connectivity.rs

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

//! Reachability check run for every tentative wall removal.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use super::direction::Direction;
use super::walls::WallGrid;

/// Whether `anchor` can be reached from any of the `starts` positions through passable cells.
///
/// The frontier is expanded in order of the coordinate sum of its cells, which pulls the search
/// toward the origin without computing real distances. The search stops as soon as the anchor
/// is dequeued.
pub fn reachable(walls: &WallGrid, starts: &[(usize, usize)], anchor: (usize, usize)) -> bool {
    let mut frontier: BinaryHeap<Reverse<(usize, (usize, usize))>> = BinaryHeap::new();
    let mut visited: HashSet<(usize, usize)> = HashSet::with_capacity(walls.rows() * walls.cols());

    for &start in starts {
        if walls.get(start).is_passable() && visited.insert(start) {
            frontier.push(Reverse((start.0 + start.1, start)));
        }
    }

    while let Some(Reverse((_, position))) = frontier.pop() {
        if position == anchor {
            return true;
        }
        for direction in Direction::ALL {
            let Some(next) = direction.offset(position, walls.rows(), walls.cols()) else {
                continue;
            };
            if walls.get(next).is_passable() && visited.insert(next) {
                frontier.push(Reverse((next.0 + next.1, next)));
            }
        }
    }
    false
}
