//! CLI entry point for replaying pixel-art edit scripts

use clap::Parser;
use pixelgrid::io::cli::{Cli, FileProcessor};

fn main() -> pixelgrid::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
