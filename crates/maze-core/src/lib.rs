//! **maze-core** — the grid model for text mazes.
//!
//! This crate provides the value types shared by the generator and the
//! solver: [`Coord`] cell coordinates, [`CellKind`] classification, and the
//! validated, immutable [`Grid`] parsed from (or printed to) the maze text
//! format:
//!
//! ```text
//! +-+-+-+
//! |     |
//! + +-+ +
//! |  F| |
//! +-+-+ +
//! |$    |
//! +-+-+-+
//! ```
//!
//! `$` marks the start, `F` the goal and a space an open passage; every
//! other symbol is a wall.

pub mod geom;
pub mod grid;

pub use geom::{CARDINALS, Coord};
pub use grid::{CellKind, Grid, GridError, symbol};
