//! CLI entry point for the ASCII art to GeoJSON converter

use clap::Parser;
use env_logger::Env;
use geojson_art::io::cli::{Cli, FileProcessor};

fn main() -> geojson_art::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
