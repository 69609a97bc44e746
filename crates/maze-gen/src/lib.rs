//! Seeded maze generation for the text grid format.

pub mod mapgen;

pub use mapgen::{DEFAULT_CARVE_PROBABILITY, GenConfig, GenError, MazeGen};
