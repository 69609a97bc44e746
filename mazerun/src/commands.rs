//! Subcommand execution.

use std::error::Error;
use std::io::{self, Read, Write};

use maze_core::Grid;
use maze_gen::{GenConfig, GenError, MazeGen};
use maze_paths::{Path, solve};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::{Command, Format, GenArgs};

/// Run `command`, writing its output to `out`.
pub fn execute<W: Write>(command: Command, out: &mut W) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Generate { gen_args } => {
            let grid = generate(&gen_args)?;
            writeln!(out, "{grid}")?;
        }
        Command::Solve { input, format } => {
            let text = read_input(&input)?;
            let grid = Grid::parse(&text)?;
            let path = solve(&grid)?;
            write_path(out, &path, format)?;
        }
        Command::Run { gen_args, format } => {
            let grid = generate(&gen_args)?;
            writeln!(out, "{grid}")?;
            let path = solve(&grid)?;
            write_path(out, &path, format)?;
        }
    }
    Ok(())
}

/// Generate a maze from command-line settings.
///
/// The seed is logged so a run can be reproduced with `--seed`.
pub fn generate(args: &GenArgs) -> Result<Grid, GenError> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed {seed}");

    let config = GenConfig {
        carve_probability: args.carve_probability,
    };
    let mut mg = MazeGen::with_config(StdRng::seed_from_u64(seed), config);
    if args.solvable {
        mg.generate_solvable(args.width, args.height, args.attempts)
    } else {
        mg.generate(args.width, args.height)
    }
}

/// Print a solution in the requested format.
pub fn write_path<W: Write>(out: &mut W, path: &Path, format: Format) -> Result<(), Box<dyn Error>> {
    match format {
        Format::Text if path.is_empty() => writeln!(out, "no path")?,
        Format::Text => {
            for d in path {
                writeln!(out, "{d}")?;
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, path)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn read_input(input: &std::path::Path) -> io::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
    }
}
