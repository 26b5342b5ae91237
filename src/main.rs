//! CLI entry point for tilemap collider generation

use clap::Parser;
use tilerects::io::cli::{Cli, FileProcessor};

fn main() -> tilerects::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
