//! CLI entry point for the tile-frame image generator

use clap::Parser;
use framefill::io::cli::{Cli, Generator};

fn main() -> framefill::Result<()> {
    let cli = Cli::parse();
    let generator = Generator::new(cli);
    generator.process()
}
