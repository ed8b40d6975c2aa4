/*
cli_options.rs

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

//! Process command-line options.
//!
//! Hamcycle generates random Hamiltonian cycles and prints them, either as a grid of numbers or
//! as JSON. The cycle value of a node is its position in the tour, starting from 1.
//!
//! # Examples
//!
//! Generate a cycle for the default 50x30 playfield:
//!
//! ```
//! $ hamcycle
//! ```
//!
//! Generate a reproducible cycle for a 10x16 node grid:
//!
//! ```
//! $ hamcycle --rows 10 --cols 16 --seed 3
//! ```
//!
//! The smallest grid has only one cycle:
//!
//! ```
//! $ hamcycle --rows 2 --cols 2
//! 1 2
//! 4 3
//! ```
//!
//! Generate three cycles for a 20x12 playfield, in JSON, and print some statistics:
//!
//! ```
//! $ hamcycle -W 20 -H 12 -c 3 -f json -s
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::env;
use std::time::Instant;

use hamcycle::generator::{CycleGrid, GenerationError};
use hamcycle::playfield::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Playfield};

/// Number of failed attempts accepted for each requested cycle before giving up.
const MAX_ATTEMPTS: usize = 10;

/// Output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Aligned numbers, one row per line
    Grid,
    /// JSON array of cycle grids
    Json,
}

/// Generate random Hamiltonian cycles over a grid.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Playfield width, frame included (odd values are rounded up)
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Playfield height, frame included (odd values are rounded up)
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Number of node rows (replaces the playfield dimensions)
    #[arg(long, requires = "cols")]
    rows: Option<usize>,

    /// Number of node columns (replaces the playfield dimensions)
    #[arg(long, requires = "rows")]
    cols: Option<usize>,

    /// Number of cycles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for the random generator, for reproducible cycles
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = Format::Grid)]
    format: Format,

    /// Surround the cycle with a frame of zeros, in playfield coordinates
    #[arg(short, long, default_value_t = false)]
    pad: bool,

    /// Print some statistics after generating the cycles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit status.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Node grid dimensions
    //
    let (rows, cols): (usize, usize) = match (args.rows, args.cols) {
        (Some(rows), Some(cols)) => (rows, cols),
        _ => match Playfield::new(args.width, args.height) {
            Ok(playfield) => (playfield.node_rows(), playfield.node_cols()),
            Err(e) => {
                eprintln!("Error: {}x{} playfield: {e}", args.width, args.height);
                return 1;
            }
        },
    };

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    //
    // Generate the cycles
    //
    let mut grids: Vec<CycleGrid> = Vec::with_capacity(args.count);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut errors: usize = 0;
    let mut attempts: usize = 0;
    while grids.len() < args.count {
        debug!("Cycle {}", grids.len());
        let start: Instant = Instant::now();
        let ret: Result<CycleGrid, GenerationError> =
            hamcycle::generator::generate(rows, cols, &mut rng);
        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }

        match ret {
            Ok(grid) => {
                // Verify the cycle before printing it
                if let Err(e) = grid.validate() {
                    eprintln!("Bug: invalid cycle: {e}: {:?}", grid.values());
                    return 2;
                }
                grids.push(grid);
                attempts = 0;
            }
            Err(e) if e.is_retryable() => {
                errors += 1;
                attempts += 1;
                debug!("ERROR generating cycle: {e}");
                if attempts >= MAX_ATTEMPTS {
                    eprintln!("Error: giving up after {attempts} attempts: {e}");
                    return 1;
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    }

    //
    // Print the cycles
    //
    match args.format {
        Format::Grid => {
            for (i, grid) in grids.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_grid(grid, args.pad);
            }
        }
        Format::Json => {
            let out: Result<String, serde_json::Error> = if args.pad {
                let padded: Vec<Vec<Vec<usize>>> = grids.iter().map(|g| g.padded()).collect();
                serde_json::to_string_pretty(&padded)
            } else {
                serde_json::to_string_pretty(&grids)
            };
            match out {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Error: cannot serialize the cycles: {e}");
                    return 1;
                }
            }
        }
    }

    // Print some stats
    if args.summary {
        eprintln!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
            errors = {}",
            total,
            total / (args.count + errors).max(1) as f32,
            max,
            errors
        );
    }
    0
}

/// Print the cycle values, right-aligned.
fn print_grid(grid: &CycleGrid, pad: bool) {
    let rows: Vec<Vec<usize>> = if pad {
        grid.padded()
    } else {
        grid.values()
            .chunks(grid.cols().max(1))
            .map(|r| r.to_vec())
            .collect()
    };
    let width: usize = grid.len().to_string().len();
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
        println!("{}", line.join(" "));
    }
}
