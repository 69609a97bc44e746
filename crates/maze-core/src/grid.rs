//! The [`Grid`] type: an immutable, validated maze read from text.
//!
//! A grid is a rectangular block of symbols. Exactly one cell holds the
//! start marker and exactly one holds the goal marker; both invariants are
//! checked when the grid is built, so a `Grid` value is always well formed.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geom::Coord;

/// Symbols of the grid text format.
pub mod symbol {
    /// Start marker.
    pub const START: char = '$';
    /// Goal marker.
    pub const GOAL: char = 'F';
    /// Open passage.
    pub const OPEN: char = ' ';
    /// Lattice joint between wall segments.
    pub const CORNER: char = '+';
    /// Wall segment on a lattice row.
    pub const HORIZONTAL: char = '-';
    /// Wall segment on a passage row.
    pub const VERTICAL: char = '|';
}

// ---------------------------------------------------------------------------
// CellKind
// ---------------------------------------------------------------------------

/// What a grid cell is, as far as traversal is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Wall,
    Open,
    Start,
    Goal,
}

impl CellKind {
    /// Classify a symbol. Anything that is not open space, start or goal
    /// is a wall.
    pub const fn from_symbol(ch: char) -> Self {
        match ch {
            symbol::OPEN => Self::Open,
            symbol::START => Self::Start,
            symbol::GOAL => Self::Goal,
            _ => Self::Wall,
        }
    }

    /// Whether a path may pass through a cell of this kind.
    #[inline]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Reasons a block of text is not a valid maze grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("malformed grid: no rows")]
    Empty,
    #[error("malformed grid: row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("malformed grid: no start marker '{}'", symbol::START)]
    MissingStart,
    #[error("malformed grid: no goal marker '{}'", symbol::GOAL)]
    MissingGoal,
    #[error("malformed grid: start marker at {first} and again at {second}")]
    DuplicateStart { first: Coord, second: Coord },
    #[error("malformed grid: goal marker at {first} and again at {second}")]
    DuplicateGoal { first: Coord, second: Coord },
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular maze grid with one start and one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    width: usize,
    height: usize,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Parse a grid from text, one row per line.
    ///
    /// Leading and trailing blank lines are ignored; spaces are significant
    /// since they are open cells.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        Self::from_rows(s.trim_matches(|c: char| c == '\n' || c == '\r').lines())
    }

    /// Build a grid from its rows.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0;
        let mut start: Option<Coord> = None;
        let mut goal: Option<Coord> = None;

        for (r, line) in rows.into_iter().enumerate() {
            let line = line.as_ref().trim_end_matches('\r');
            let found = line.chars().count();
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row: r,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }

            for (c, ch) in line.chars().enumerate() {
                let at = Coord::new(r as i32, c as i32);
                match CellKind::from_symbol(ch) {
                    CellKind::Start => {
                        if let Some(first) = start.replace(at) {
                            return Err(GridError::DuplicateStart { first, second: at });
                        }
                    }
                    CellKind::Goal => {
                        if let Some(first) = goal.replace(at) {
                            return Err(GridError::DuplicateGoal { first, second: at });
                        }
                    }
                    _ => {}
                }
                cells.push(ch);
            }
            height += 1;
        }

        let width = match width {
            Some(w) if w > 0 => w,
            _ => return Err(GridError::Empty),
        };
        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;

        Ok(Self {
            cells,
            width,
            height,
            start,
            goal,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Location of the start marker.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Location of the goal marker.
    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        self.index(p).is_some()
    }

    #[inline]
    fn index(&self, p: Coord) -> Option<usize> {
        if p.row >= 0 && p.col >= 0 && (p.row as usize) < self.height && (p.col as usize) < self.width
        {
            Some(p.row as usize * self.width + p.col as usize)
        } else {
            None
        }
    }

    /// The raw symbol at `p`, or `None` if out of bounds.
    pub fn symbol_at(&self, p: Coord) -> Option<char> {
        self.index(p).map(|i| self.cells[i])
    }

    /// The kind of cell at `p`, or `None` if out of bounds.
    pub fn cell_at(&self, p: Coord) -> Option<CellKind> {
        self.symbol_at(p).map(CellKind::from_symbol)
    }

    /// Whether `p` is in bounds and traversable.
    pub fn is_open(&self, p: Coord) -> bool {
        self.cell_at(p).is_some_and(CellKind::is_open)
    }

    /// Open, in-bounds orthogonal neighbours of `p`, in the fixed order
    /// right, left, down, up.
    pub fn neighbors(&self, p: Coord) -> impl Iterator<Item = Coord> + '_ {
        p.neighbors_4().into_iter().filter(move |&n| self.is_open(n))
    }

    /// Iterate over every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &ch)| {
            let at = Coord::new((i / self.width) as i32, (i % self.width) as i32);
            (at, CellKind::from_symbol(ch))
        })
    }

    /// The grid's rows as strings.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width).map(|row| row.iter().collect())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&row)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_rows() {
        let g = Grid::parse("$ \n F").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"["$ "," F"]"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn invalid_rows_fail_to_deserialize() {
        let res: Result<Grid, _> = serde_json::from_str(r#"["$ ","  "]"#);
        assert!(res.is_err());
    }
}
