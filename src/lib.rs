/*
lib.rs

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

//! Random Hamiltonian cycles for a self-driving snake.
//!
//! * [`generator`] builds the cycle.
//! * [`playfield`] converts playfield dimensions into node dimensions.
//! * [`autopilot`] moves a snake along the cycle.

pub mod autopilot;
pub mod generator;
pub mod playfield;
