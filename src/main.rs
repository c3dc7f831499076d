use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use sapling::core::config;
use sapling::tui;

/// Grow and shrink an ASCII tree with the arrow keys; q quits.
///
/// The CLI surface is deliberately flagless — everything tunable lives in
/// `~/.sapling/config.toml`.
#[derive(Parser)]
#[command(name = "sapling", about = "An interactive ASCII tree for your terminal", version)]
struct Args {}

fn main() -> std::io::Result<()> {
    let Args {} = Args::parse();

    // Initialize file logger - writes to sapling.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("sapling.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Sapling starting up");

    let loaded = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config unusable ({e}), falling back to defaults");
        config::SaplingConfig::default()
    });
    let resolved = config::resolve(&loaded);

    tui::run(&resolved)
}
