use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{GameConfig, GameLoop};
use grid_snake::modes::HumanMode;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake in the terminal with a session leaderboard")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in cells
    #[arg(long)]
    cols: Option<u32>,

    /// Board height in cells
    #[arg(long)]
    rows: Option<u32>,

    /// Side of one cell in board units
    #[arg(long)]
    cell_size: Option<u32>,

    /// Milliseconds between game ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log (the terminal itself is taken by the game)
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    /// Log verbosity: off, error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    info!("starting with {config:?}");

    let game = match cli.seed {
        Some(seed) => GameLoop::seeded(&config, seed)?,
        None => GameLoop::new(&config)?,
    };

    let mut human_mode = HumanMode::new(game);
    human_mode.run().await?;

    Ok(())
}
