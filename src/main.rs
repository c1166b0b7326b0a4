//! CLI entry point for the sprite generator

use clap::Parser;
use pixelsprite::io::cli::{Cli, SpriteProcessor};

fn main() -> pixelsprite::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    let processor = SpriteProcessor::new(cli);
    processor.process().map(|_| ())
}
