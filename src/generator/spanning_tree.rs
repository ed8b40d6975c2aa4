/*
spanning_tree.rs

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

//! Random spanning tree over the posts of the wall grid.
//!
//! Posts are visited in row-major order. Each post tries to open the heavier of its two forward
//! edges (toward the next column and toward the next row), and keeps the opening only if the
//! [`connectivity::reachable`] check confirms that both posts of the edge can still reach the
//! origin. Otherwise it tries the edge on the other side of the same axis.
//!
//! When a post with two forward edges is processed, neither of them nor the two far sides of
//! the 2x2 square of posts they belong to have been touched yet, so the removal closes a loop
//! and always succeeds. This gives exactly `(posts_per_row - 1) * (posts_per_col - 1)`
//! removals, which is the number of edges a connected graph of the posts must lose to become a
//! tree.

use log::debug;

use super::connectivity;
use super::walls::{WallCell, WallGrid};

/// Connectivity anchor: the first post.
pub const ORIGIN: (usize, usize) = (0, 0);

/// Remove walls until the remaining edges form a spanning tree of the posts.
///
/// Return the number of removed edges.
pub fn build_spanning_tree(walls: &mut WallGrid) -> usize {
    let mut removed: usize = 0;

    for row in (0..walls.rows()).step_by(2) {
        for col in (0..walls.cols()).step_by(2) {
            let Some(forward) = forward_edge(walls, row, col) else {
                continue;
            };
            if try_remove(walls, forward) {
                removed += 1;
                continue;
            }
            if let Some(opposite) = opposite_edge((row, col), forward)
                && try_remove(walls, opposite)
            {
                removed += 1;
            }
        }
    }
    debug!(
        "Spanning tree: {removed} walls removed, {} walls kept for {} posts",
        walls.num_edges(),
        walls.num_posts()
    );
    removed
}

fn weight(walls: &WallGrid, position: (usize, usize)) -> Option<u16> {
    match walls.get(position) {
        WallCell::Edge(w) => Some(w),
        _ => None,
    }
}

/// Select the heavier of the edges toward the next column and the next row.
fn forward_edge(walls: &WallGrid, row: usize, col: usize) -> Option<(usize, usize)> {
    let right: (usize, usize) = (row, col + 1);
    let down: (usize, usize) = (row + 1, col);
    match (weight(walls, right), weight(walls, down)) {
        (Some(r), Some(d)) => Some(if d > r { down } else { right }),
        (Some(_), None) => Some(right),
        (None, Some(_)) => Some(down),
        (None, None) => None,
    }
}

/// Edge on the other side of `post`, on the same axis as `edge`.
fn opposite_edge(post: (usize, usize), edge: (usize, usize)) -> Option<(usize, usize)> {
    let (row, col) = post;
    if edge.0 == row {
        col.checked_sub(1).map(|c| (row, c))
    } else {
        row.checked_sub(1).map(|r| (r, col))
    }
}

/// Tentatively open the edge and roll back if it splits the tree.
fn try_remove(walls: &mut WallGrid, edge: (usize, usize)) -> bool {
    let Some((near, far)) = walls.edge_endpoints(edge) else {
        return false;
    };
    let Some(weight) = walls.remove_edge(edge) else {
        return false;
    };
    if connectivity::reachable(walls, &[far], ORIGIN)
        && connectivity::reachable(walls, &[near], ORIGIN)
    {
        return true;
    }
    debug!("    Wall {edge:?} restored");
    walls.set(edge, WallCell::Edge(weight));
    false
}
