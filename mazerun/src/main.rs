use clap::Parser;
use mazerun::{Cli, execute, logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    let stdout = std::io::stdout();
    execute(cli.command_or_default(), &mut stdout.lock())?;
    Ok(())
}
