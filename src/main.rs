//! CLI entry point for the sprite mosaic generator

use clap::Parser;
use crewtile::io::cli::{Cli, MosaicProcessor};

fn main() -> crewtile::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let processor = MosaicProcessor::new(cli);
    processor.process()
}
