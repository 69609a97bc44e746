use maze_core::Coord;
use thiserror::Error;

/// Failures of a maze search.
///
/// An unreachable goal is not one of them: it is reported as an empty
/// [`Path`](crate::Path).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("maze has no start cell")]
    MissingStart,
    #[error("maze has no goal cell")]
    MissingGoal,
    #[error("predecessor chain broken at {at}")]
    BrokenChain { at: Coord },
    #[error("step from {from} to {to} is not a single orthogonal move")]
    InvalidStep { from: Coord, to: Coord },
    #[error("search interrupted after {expanded} expansions")]
    Interrupted { expanded: usize },
    #[error("search cancelled")]
    Cancelled,
}
