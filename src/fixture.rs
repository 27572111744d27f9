//! Scripted match days for the `scoreboard` binary.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::board::models::{Match, MatchId};
use crate::board::ScoreBoard;
use crate::errors::ScoreBoardError;

/// One match and its final score.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixtureEntry {
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
}

impl FixtureEntry {
    pub fn new(home_team: &str, away_team: &str, home_score: i32, away_score: i32) -> Self {
        FixtureEntry {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score,
            away_score,
        }
    }
}

/// The five-match World Cup day, listed in kick-off order.
pub fn world_cup() -> Vec<FixtureEntry> {
    vec![
        FixtureEntry::new("Mexico", "Canada", 0, 5),
        FixtureEntry::new("Spain", "Brazil", 10, 2),
        FixtureEntry::new("Germany", "France", 2, 2),
        FixtureEntry::new("Uruguay", "Italy", 6, 6),
        FixtureEntry::new("Argentina", "Australia", 3, 1),
    ]
}

/// Read a JSON array of fixture entries.
pub fn load(path: &Path) -> Result<Vec<FixtureEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;
    parse(&raw).with_context(|| format!("Invalid fixture {}", path.display()))
}

fn parse(raw: &str) -> Result<Vec<FixtureEntry>> {
    let entries: Vec<FixtureEntry> = serde_json::from_str(raw)?;
    Ok(entries)
}

/// Start every entry in order, set the final scores, then finish them in
/// kick-off order. Returns the ids in kick-off order.
pub fn play(
    board: &mut ScoreBoard,
    entries: &[FixtureEntry],
    start_gap: Duration,
) -> Result<Vec<MatchId>, ScoreBoardError> {
    let mut ids = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 && !start_gap.is_zero() {
            std::thread::sleep(start_gap);
        }
        ids.push(board.start_game(Match::new(entry.home_team.as_str(), entry.away_team.as_str()))?);
    }

    for (id, entry) in ids.iter().zip(entries) {
        board.update_score(*id, entry.home_score, entry.away_score)?;
    }

    for id in &ids {
        board.finish_game(*id)?;
    }

    info!("Played {} matches", ids.len());
    Ok(ids)
}
