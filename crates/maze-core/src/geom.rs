//! Geometry primitives: [`Coord`] and the cardinal offsets.
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward and columns grow
//! to the right, matching the order in which grid text is read.

use std::fmt;
use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell coordinate `(row, col)`.
///
/// Equality and hashing are structural, so two coordinates built in
/// different places always compare and hash identically. A `Coord` also
/// doubles as a delta between two cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// Cardinal offsets in canonical neighbor order: right, left, down, up.
///
/// Search tie-breaking depends on this order, so it is part of the
/// observable contract of [`Grid::neighbors`](crate::Grid::neighbors).
pub const CARDINALS: [Coord; 4] = [
    Coord::new(0, 1),
    Coord::new(0, -1),
    Coord::new(1, 0),
    Coord::new(-1, 0),
];

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in [`CARDINALS`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        CARDINALS.map(|d| self + d)
    }

    /// Whether both components are odd, i.e. the coordinate sits on a
    /// passage cell of the wall lattice.
    #[inline]
    pub fn is_passage_parity(self) -> bool {
        self.row & 1 == 1 && self.col & 1 == 1
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Coord {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.row, -self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
