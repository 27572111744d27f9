use clap::Parser;
use std::path::PathBuf;

/// Upper bound for the pause between kick-offs.
const MAX_START_GAP_MS: u64 = 60_000;

/// Replay a match day on the scoreboard and print the finished summary
#[derive(Parser, Debug, Clone)]
#[command(name = "scoreboard", version, about)]
pub struct Config {
    /// JSON fixture file (array of {home_team, away_team, home_score, away_score});
    /// the built-in World Cup day is used when omitted
    #[arg(long, env = "SCOREBOARD_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long, env = "SCOREBOARD_JSON", default_value = "false")]
    pub json: bool,

    /// Pause between kick-offs in milliseconds
    #[arg(long, env = "SCOREBOARD_START_GAP_MS", default_value = "0")]
    pub start_gap_ms: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.start_gap_ms > MAX_START_GAP_MS {
            anyhow::bail!("start_gap_ms must be at most {}", MAX_START_GAP_MS);
        }
        if let Some(path) = &self.fixture {
            if !path.is_file() {
                anyhow::bail!("fixture file not found: {}", path.display());
            }
        }
        Ok(())
    }
}
