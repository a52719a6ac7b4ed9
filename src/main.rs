use anyhow::{Context, Result};
use clap::Parser;
use gridsnake::game::GameConfig;
use gridsnake::modes::PlayMode;
use log::LevelFilter;
use simplelog::WriteLogger;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Classic fixed-grid Snake in the terminal")]
struct Cli {
    /// Board extent per side, in board units
    #[arg(long)]
    board_size: Option<i32>,

    /// Size of one grid cell, in board units
    #[arg(long)]
    cell_size: Option<i32>,

    /// Milliseconds between game ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// JSON config file; individual flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal hosts the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before touching the terminal
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
            .context("Failed to initialize logger")?;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(board_size) = cli.board_size {
        config.board_size = board_size;
    }
    if let Some(cell_size) = cli.cell_size {
        config.cell_size = cell_size;
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    config.validate()?;

    let mut mode = PlayMode::new(config);
    mode.run().await
}
