use maze_core::Coord;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    ///
    /// Neighbors must be produced in a fixed order; search tie-breaking
    /// depends on it.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// Pather with an admissible heuristic, as needed by A*.
///
/// Every edge has unit cost.
pub trait AstarPather: Pather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Coord, to: Coord) -> f64;
}

/// A searchable maze: a pather that knows where it starts and ends.
pub trait Maze: AstarPather {
    /// Location of the start cell, if the maze has one.
    fn find_start(&self) -> Option<Coord>;

    /// Location of the goal cell, if the maze has one.
    fn find_goal(&self) -> Option<Coord>;
}
