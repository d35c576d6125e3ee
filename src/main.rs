//! CLI entry point for the cellular automaton poster generator

use caposters::io::cli::{Cli, PosterRunner};
use caposters::io::logging::init_logging;
use clap::Parser;

fn main() -> caposters::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    let runner = PosterRunner::new(&cli)?;
    runner.run()
}
