//! Pathing trait implementations for [`Grid`].

use maze_core::{Coord, Grid};

use crate::distance::euclidean;
use crate::traits::{AstarPather, Maze, Pather};

impl Pather for Grid {
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        buf.extend(Grid::neighbors(self, p));
    }
}

impl AstarPather for Grid {
    /// Straight-line distance; never exceeds the Manhattan distance, hence
    /// admissible and consistent with unit-cost orthogonal moves.
    fn estimate(&self, from: Coord, to: Coord) -> f64 {
        euclidean(from, to)
    }
}

impl Maze for Grid {
    fn find_start(&self) -> Option<Coord> {
        Some(self.start())
    }

    fn find_goal(&self) -> Option<Coord> {
        Some(self.goal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pather_matches_grid_neighbors() {
        let grid = Grid::parse("+ +\n $F\n+ +").unwrap();
        let mut buf = Vec::new();
        Pather::neighbors(&grid, grid.start(), &mut buf);
        assert_eq!(
            buf,
            vec![Coord::new(1, 2), Coord::new(1, 0), Coord::new(2, 1), Coord::new(0, 1)]
        );
    }

    #[test]
    fn endpoints_come_from_grid() {
        let grid = Grid::parse("$ F").unwrap();
        assert_eq!(grid.find_start(), Some(Coord::new(0, 0)));
        assert_eq!(grid.find_goal(), Some(Coord::new(0, 2)));
        assert_eq!(grid.estimate(grid.start(), grid.goal()), 2.0);
    }
}
