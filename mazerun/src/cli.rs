//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use maze_gen::DEFAULT_CARVE_PROBABILITY;

pub const DEFAULT_SIZE: usize = 29;
pub const DEFAULT_ATTEMPTS: usize = 100;

#[derive(Parser, Debug)]
#[command(version, about, name = "mazerun")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand to run; `run` with defaults when none was given.
    pub fn command_or_default(self) -> Command {
        self.command.unwrap_or(Command::Run {
            gen_args: GenArgs::default(),
            format: Format::Text,
        })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate a random maze and print it
    Generate {
        #[command(flatten)]
        gen_args: GenArgs,
    },
    /// Read a maze and print the moves from start to goal
    Solve {
        /// Maze file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Generate a maze, print it, then print its solution
    Run {
        #[command(flatten)]
        gen_args: GenArgs,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct GenArgs {
    /// Maze width in characters (odd, at least 3)
    #[arg(short = 'W', long, default_value_t = DEFAULT_SIZE)]
    pub width: usize,
    /// Maze height in lines (odd, at least 3)
    #[arg(short = 'H', long, default_value_t = DEFAULT_SIZE)]
    pub height: usize,
    /// Random seed; drawn from the OS when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Chance that each interior wall is removed
    #[arg(short, long, default_value_t = DEFAULT_CARVE_PROBABILITY)]
    pub carve_probability: f64,
    /// Regenerate until the goal is reachable
    #[arg(long)]
    pub solvable: bool,
    /// Give up on --solvable after this many mazes
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,
}

impl Default for GenArgs {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            seed: None,
            carve_probability: DEFAULT_CARVE_PROBABILITY,
            solvable: false,
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

/// How a solution is printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One move per line, or `no path`
    #[default]
    Text,
    /// A JSON array of moves
    Json,
}
