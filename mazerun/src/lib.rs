//! mazerun — generate and solve text mazes from the command line.

pub mod cli;
pub mod commands;
pub mod logger;

pub use cli::{Cli, Command, Format, GenArgs};
pub use commands::execute;
