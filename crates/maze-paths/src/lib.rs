//! Maze solving for text grids.
//!
//! This crate finds shortest routes through a [`maze_core::Grid`] and
//! reports them as cardinal moves:
//!
//! - **A\*** shortest-path search ([`Solver::solve`], [`solve`]) guided by
//!   the Euclidean distance to the goal
//! - **BFS** uninformed reference search ([`bfs_distance`], [`bfs_map`])
//! - **Move encoding** from cell sequences to [`Direction`]s ([`encode`])
//!
//! An unreachable goal is not an error: the solver returns an empty
//! [`Path`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`AstarPather`] : [`Pather`] | [`Solver::astar_path`] |
//! | [`Maze`] : [`AstarPather`] | [`Solver::solve`] |

mod astar;
mod bfs;
mod distance;
mod error;
mod maze;
pub mod moves;
mod traits;

pub use astar::{Solver, solve};
pub use bfs::{bfs_distance, bfs_map};
pub use distance::{euclidean, manhattan};
pub use error::SolveError;
pub use moves::{Direction, Path, encode};
pub use traits::{AstarPather, Maze, Pather};
