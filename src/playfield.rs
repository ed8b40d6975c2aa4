/*
playfield.rs

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

//! Playfield dimensions.
//!
//! The snake moves on a playfield of characters surrounded by a one-character frame. Nodes of
//! the cycle are the cells inside the frame. Both sides of the playfield are rounded up to an
//! even value so that the node grid can hold a cycle.

use log::debug;
use rand::Rng;

use crate::generator::{CycleGrid, GenerationError, generate, hamiltonian};

/// Width of the frame around the playfield, on each side.
pub const BORDER: usize = 1;

/// Default playfield width, frame included.
pub const DEFAULT_WIDTH: usize = 50;

/// Default playfield height, frame included.
pub const DEFAULT_HEIGHT: usize = 30;

/// Playfield dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Playfield {
    width: usize,
    height: usize,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Playfield {
    /// Create a [`Playfield`] object. Odd sides are rounded up.
    ///
    /// # Errors
    ///
    /// The method returns an error if the playfield is too small to hold a cycle.
    pub fn new(width: usize, height: usize) -> Result<Self, GenerationError> {
        let playfield: Playfield = Self {
            width: width + width % 2,
            height: height + height % 2,
        };
        if playfield.width != width || playfield.height != height {
            debug!(
                "Playfield {width}x{height} rounded to {}x{}",
                playfield.width, playfield.height
            );
        }
        hamiltonian::check_dimensions(playfield.node_rows(), playfield.node_cols())?;
        Ok(playfield)
    }

    /// Width in characters, frame included.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in characters, frame included.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of node rows inside the frame.
    pub fn node_rows(&self) -> usize {
        self.height.saturating_sub(2 * BORDER)
    }

    /// Number of node columns inside the frame.
    pub fn node_cols(&self) -> usize {
        self.width.saturating_sub(2 * BORDER)
    }

    /// Node for the playfield cell at column `x` and row `y`, or [`None`] on the frame.
    pub fn to_node(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        let row: usize = y.checked_sub(BORDER)?;
        let col: usize = x.checked_sub(BORDER)?;
        if row < self.node_rows() && col < self.node_cols() {
            Some((row, col))
        } else {
            None
        }
    }

    /// Generate a cycle covering the inside of the playfield.
    ///
    /// # Errors
    ///
    /// See [`generate`].
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<CycleGrid, GenerationError> {
        generate(self.node_rows(), self.node_cols(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_playfield() {
        let playfield = Playfield::default();
        assert_eq!((playfield.node_rows(), playfield.node_cols()), (28, 48));
    }

    #[test]
    fn odd_sides_are_rounded_up() {
        let playfield = Playfield::new(11, 9).unwrap();
        assert_eq!((playfield.width(), playfield.height()), (12, 10));
        assert_eq!((playfield.node_rows(), playfield.node_cols()), (8, 10));
    }

    #[test]
    fn too_small() {
        assert_eq!(
            Playfield::new(2, 10),
            Err(GenerationError::TooSmall { rows: 8, cols: 0 })
        );
        assert_eq!(
            Playfield::new(2, 2),
            Err(GenerationError::TooSmall { rows: 0, cols: 0 })
        );
        assert!(Playfield::new(4, 4).is_ok());
    }

    #[test]
    fn to_node_skips_the_frame() {
        let playfield = Playfield::new(10, 6).unwrap();
        assert_eq!(playfield.to_node(0, 3), None);
        assert_eq!(playfield.to_node(3, 0), None);
        assert_eq!(playfield.to_node(9, 3), None);
        assert_eq!(playfield.to_node(3, 5), None);
        assert_eq!(playfield.to_node(1, 1), Some((0, 0)));
        assert_eq!(playfield.to_node(8, 4), Some((3, 7)));
    }

    #[test]
    fn padded_cycle_matches_playfield_coordinates() {
        let playfield = Playfield::new(8, 6).unwrap();
        let grid = playfield.generate(&mut StdRng::seed_from_u64(5)).unwrap();
        let padded = grid.padded();
        assert_eq!(padded.len(), playfield.height());
        assert_eq!(padded[0].len(), playfield.width());
        for y in 0..playfield.height() {
            for x in 0..playfield.width() {
                let expected = playfield.to_node(x, y).and_then(|n| grid.get(n)).unwrap_or(0);
                assert_eq!(padded[y][x], expected);
            }
        }
    }
}
