/*
direction.rs

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

//! Headings on a grid where rows grow downward.
//!
//! All the turning arithmetic lives in a single lookup table so that the wall follower and the
//! autopilot never branch on headings themselves.

/// A cardinal heading.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Row of the heading table.
struct Heading {
    /// Unit vector as `(row, col)` deltas.
    delta: (isize, isize),

    /// Heading after a quarter turn to the right.
    clockwise: Direction,

    /// Heading after a quarter turn to the left.
    counter_clockwise: Direction,

    /// Opposite heading.
    reverse: Direction,
}

/// Indexed by `Direction as usize`.
const HEADINGS: [Heading; 4] = [
    Heading {
        delta: (-1, 0),
        clockwise: Direction::Right,
        counter_clockwise: Direction::Left,
        reverse: Direction::Down,
    },
    Heading {
        delta: (0, 1),
        clockwise: Direction::Down,
        counter_clockwise: Direction::Up,
        reverse: Direction::Left,
    },
    Heading {
        delta: (1, 0),
        clockwise: Direction::Left,
        counter_clockwise: Direction::Right,
        reverse: Direction::Up,
    },
    Heading {
        delta: (0, -1),
        clockwise: Direction::Up,
        counter_clockwise: Direction::Down,
        reverse: Direction::Right,
    },
];

impl Direction {
    /// The four headings, clockwise from [`Direction::Up`].
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn heading(self) -> &'static Heading {
        &HEADINGS[self as usize]
    }

    /// Unit vector of the heading, as `(row, col)` deltas.
    pub fn delta(self) -> (isize, isize) {
        self.heading().delta
    }

    /// Heading after turning right.
    pub fn clockwise(self) -> Direction {
        self.heading().clockwise
    }

    /// Heading after turning left.
    pub fn counter_clockwise(self) -> Direction {
        self.heading().counter_clockwise
    }

    /// Opposite heading.
    pub fn reverse(self) -> Direction {
        self.heading().reverse
    }

    /// Move one step from `position` in a `rows` x `cols` grid.
    ///
    /// Return [`None`] when the step leaves the grid.
    pub fn offset(
        self,
        position: (usize, usize),
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let row = position.0.checked_add_signed(dr)?;
        let col = position.1.checked_add_signed(dc)?;
        if row < rows && col < cols {
            Some((row, col))
        } else {
            None
        }
    }
}
