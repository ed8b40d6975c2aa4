/*
cycle_properties.rs

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

use rand::SeedableRng;
use rand::rngs::StdRng;

use hamcycle::autopilot::Autopilot;
use hamcycle::generator::maze::Maze;
use hamcycle::generator::walls::WallGrid;
use hamcycle::generator::{CycleGrid, GenerationError, generate, spanning_tree, tracer};

const SIZES: [(usize, usize); 9] = [
    (2, 2),
    (2, 4),
    (4, 2),
    (2, 12),
    (4, 4),
    (6, 10),
    (12, 6),
    (20, 20),
    (28, 48),
];

fn cycle(rows: usize, cols: usize, seed: u64) -> CycleGrid {
    generate(rows, cols, &mut StdRng::seed_from_u64(seed))
        .unwrap_or_else(|e| panic!("{rows}x{cols} seed {seed}: {e}"))
}

#[test]
fn every_value_appears_once() {
    for (rows, cols) in SIZES {
        for seed in 0..8 {
            let grid = cycle(rows, cols, seed);
            let mut values = grid.values().to_vec();
            values.sort_unstable();
            let expected: Vec<usize> = (1..=rows * cols).collect();
            assert_eq!(values, expected, "{rows}x{cols} seed {seed}");
        }
    }
}

#[test]
fn consecutive_values_are_adjacent() {
    for (rows, cols) in SIZES {
        for seed in 0..8 {
            let grid = cycle(rows, cols, seed);
            let n = rows * cols;
            let mut positions = vec![(0, 0); n + 1];
            for row in 0..rows {
                for col in 0..cols {
                    positions[grid.get((row, col)).unwrap()] = (row, col);
                }
            }
            for k in 1..=n {
                let a = positions[k];
                let b = positions[k % n + 1];
                assert_eq!(
                    a.0.abs_diff(b.0) + a.1.abs_diff(b.1),
                    1,
                    "{rows}x{cols} seed {seed}: {k} at {a:?}, next at {b:?}"
                );
            }
        }
    }
}

#[test]
fn same_seed_same_cycle() {
    for (rows, cols) in SIZES {
        assert_eq!(cycle(rows, cols, 99), cycle(rows, cols, 99));
    }
}

#[test]
fn different_seeds_give_different_cycles() {
    let cycles: Vec<CycleGrid> = (0..5).map(|seed| cycle(20, 20, seed)).collect();
    assert!(cycles.iter().skip(1).any(|c| *c != cycles[0]));
}

#[test]
fn spanning_tree_reaches_every_post() {
    for (rows, cols) in SIZES {
        for seed in 0..8 {
            let mut walls = WallGrid::new(rows, cols);
            walls.populate_edges(&mut StdRng::seed_from_u64(seed));
            spanning_tree::build_spanning_tree(&mut walls);
            assert!(walls.is_spanning_tree(), "{rows}x{cols} seed {seed}");
        }
    }
}

#[test]
fn smallest_cycle() {
    for seed in 0..4 {
        let grid = cycle(2, 2, seed);
        assert_eq!(grid.order(), vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
    }
}

#[test]
fn invalid_dimensions_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generate(1, 8, &mut rng),
        Err(GenerationError::TooSmall { rows: 1, cols: 8 })
    );
    assert_eq!(
        generate(8, 1, &mut rng),
        Err(GenerationError::TooSmall { rows: 8, cols: 1 })
    );
    assert_eq!(
        generate(5, 8, &mut rng),
        Err(GenerationError::OddDimension { rows: 5, cols: 8 })
    );
    assert_eq!(
        generate(3, 3, &mut rng),
        Err(GenerationError::OddDimension { rows: 3, cols: 3 })
    );
}

#[test]
fn malformed_maze_is_reported() {
    // Post (2,4) cut off from the rest of the tree
    let mut walls = WallGrid::new(4, 6);
    walls.remove_edge((0, 1));
    walls.remove_edge((2, 3));
    walls.remove_edge((1, 4));
    assert!(!walls.is_spanning_tree());

    let mut maze = Maze::from_walls(&walls);
    match tracer::trace(&mut maze) {
        Err(GenerationError::Incomplete { numbered, expected }) => {
            assert_eq!(expected, 24);
            assert!(numbered < expected);
        }
        other => panic!("expected an incomplete tour, got {other:?}"),
    }
}

#[test]
fn autopilot_comes_back_after_a_full_tour() {
    let grid = cycle(12, 16, 4);
    let start = grid.position_of(37).unwrap();
    let mut autopilot = Autopilot::new(&grid, start).unwrap();
    let mut seen = vec![false; grid.len()];
    for position in autopilot.by_ref().take(grid.len()) {
        let value = grid.get(position).unwrap();
        assert!(!seen[value - 1], "node {position:?} visited twice");
        seen[value - 1] = true;
    }
    assert_eq!(autopilot.position(), start);
    assert_eq!(autopilot.steps(), grid.len());
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn json_output_can_be_validated() {
    let grid = cycle(6, 8, 11);
    let json = serde_json::to_string(&grid).unwrap();
    let back: CycleGrid = serde_json::from_str(&json).unwrap();
    assert_eq!(back.validate(), Ok(()));
    assert_eq!(back, grid);
}
