use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::info;

use scoreboard::config::Config;
use scoreboard::fixture;
use scoreboard::ScoreBoard;

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let entries = match &config.fixture {
        Some(path) => {
            info!("Loading fixture from {}", path.display());
            fixture::load(path)?
        }
        None => fixture::world_cup(),
    };

    let mut board = ScoreBoard::new();
    fixture::play(
        &mut board,
        &entries,
        Duration::from_millis(config.start_gap_ms),
    )?;

    let summary = board.finished_summary();
    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for (rank, game) in summary.iter().enumerate() {
            println!("{}. {}", rank + 1, game);
        }
    }

    Ok(())
}
