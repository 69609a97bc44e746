//! Directional moves and their encoding from coordinate sequences.

use std::fmt;

use maze_core::Coord;

use crate::SolveError;

/// One unit step in a cardinal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a coordinate delta to a direction. Only the four unit
    /// orthogonal deltas have one.
    pub const fn from_delta(delta: Coord) -> Option<Self> {
        match (delta.row, delta.col) {
            (0, 1) => Some(Self::Right),
            (0, -1) => Some(Self::Left),
            (1, 0) => Some(Self::Down),
            (-1, 0) => Some(Self::Up),
            _ => None,
        }
    }

    /// The coordinate delta of this move.
    pub const fn offset(self) -> Coord {
        match self {
            Self::Up => Coord::new(-1, 0),
            Self::Down => Coord::new(1, 0),
            Self::Left => Coord::new(0, -1),
            Self::Right => Coord::new(0, 1),
        }
    }

    /// Output token: `"up"`, `"down"`, `"left"` or `"right"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sequence of moves from start to goal, in traversal order.
///
/// An empty path means no route exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    moves: Vec<Direction>,
}

impl Path {
    /// The empty path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the path has no moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Direction> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.moves
    }

    /// The moves as output tokens.
    pub fn tokens(&self) -> Vec<&'static str> {
        self.moves.iter().map(|d| d.as_str()).collect()
    }

    /// Replay the moves from `start`, returning every visited coordinate
    /// including `start` itself.
    pub fn trace(&self, start: Coord) -> Vec<Coord> {
        let mut cells = Vec::with_capacity(self.moves.len() + 1);
        let mut at = start;
        cells.push(at);
        for d in &self.moves {
            at = at + d.offset();
            cells.push(at);
        }
        cells
    }
}

impl From<Vec<Direction>> for Path {
    fn from(moves: Vec<Direction>) -> Self {
        Self { moves }
    }
}

impl IntoIterator for Path {
    type Item = Direction;
    type IntoIter = std::vec::IntoIter<Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Direction;
    type IntoIter = std::slice::Iter<'a, Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(d.as_str())?;
        }
        Ok(())
    }
}

/// Encode a sequence of adjacent cells as moves.
///
/// Fails on the first pair of consecutive cells that are not one
/// orthogonal step apart.
pub fn encode(cells: &[Coord]) -> Result<Path, SolveError> {
    cells
        .windows(2)
        .map(|w| {
            Direction::from_delta(w[1] - w[0]).ok_or(SolveError::InvalidStep {
                from: w[0],
                to: w[1],
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Path::from)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_serializes_as_tokens() {
        let path = Path::from(vec![Direction::Up, Direction::Left]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["up","left"]"#);
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
