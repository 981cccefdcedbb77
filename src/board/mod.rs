//! Board model: cells, capacities, and the adjacency rule.
//!
//! A board is a fixed `width x height` grid. Each coordinate has a
//! capacity equal to its number of orthogonal neighbors (2 in corners, 3 on
//! edges, 4 inside). Capacities and neighbor sets never change once the
//! board exists.
//!
//! Cells live in an `im::Vector`, so cloning a board is O(1). The resolver
//! relies on that to hand out one board snapshot per wave, and the history
//! stack relies on it to keep one snapshot per move.

mod cell;
mod grid;

pub use cell::{Cell, InconsistentCell};
pub use grid::{Board, BoardError, Neighbors};
