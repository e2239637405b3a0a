//! CLI entry point for the image-guided scatter walk

use clap::Parser;
use imagescatter::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> imagescatter::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
