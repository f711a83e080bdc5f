use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::LevelFilter;
use the_snake::game::{GameConfig, Variant, config};
use the_snake::logging;
use the_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "the_snake")]
#[command(version, about = "Classic Snake on a wraparound grid")]
struct Cli {
    /// Rule set to play by
    #[arg(long, value_enum, default_value_t = Variant::TurnTable)]
    variant: Variant,

    /// Grid width in cells
    #[arg(long, default_value_t = config::GRID_WIDTH, value_parser = grid_dimension)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = config::GRID_HEIGHT, value_parser = grid_dimension)]
    height: usize,

    /// Game ticks per second
    #[arg(long, default_value_t = config::SPEED, value_parser = clap::value_parser!(u32).range(1..=120))]
    speed: u32,

    /// Seed for apple placement and reset directions
    #[arg(long)]
    seed: Option<u64>,

    /// File receiving log records
    #[arg(long, default_value = "the_snake.log")]
    log_file: PathBuf,

    /// Minimum log level
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn grid_dimension(arg: &str) -> Result<usize, String> {
    let cells: usize = arg.parse().map_err(|err| format!("{err}"))?;
    if (config::MIN_GRID_DIMENSION..=config::MAX_GRID_DIMENSION).contains(&cells) {
        Ok(cells)
    } else {
        Err(format!(
            "{cells} is not in {}..={}",
            config::MIN_GRID_DIMENSION,
            config::MAX_GRID_DIMENSION
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file, cli.log_level)?;

    let mut config = GameConfig::new(cli.width, cli.height).with_variant(cli.variant);
    config.ticks_per_second = cli.speed;
    config.seed = cli.seed;

    info!(
        "starting with config {}",
        serde_json::to_string(&config).context("Failed to serialize config")?
    );

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await
}
