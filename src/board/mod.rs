pub mod models;
pub mod ranking;
pub mod shared;

use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use crate::errors::ScoreBoardError;
use models::{Match, MatchId};

/// Registry of ongoing and finished matches.
///
/// The board owns every match it tracks. A match moves from `ongoing` to
/// `finished` exactly once and never comes back, and every failed call leaves
/// both collections as they were.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    /// match_id → match currently in progress
    ongoing: HashMap<MatchId, Match>,
    /// In `finish_game` call order; ranking happens on read.
    finished: Vec<Match>,
    /// Ids in `finished`, for O(1) resurrection checks.
    finished_ids: HashSet<MatchId>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `game`, start it and track it as ongoing.
    ///
    /// Fails with `DuplicateMatch` if the id is already on this board (ongoing
    /// or finished), or with `MatchError::AlreadyStarted` if the caller started
    /// the match before handing it over.
    pub fn start_game(&mut self, mut game: Match) -> Result<MatchId, ScoreBoardError> {
        let id = game.id();
        if self.ongoing.contains_key(&id) || self.finished_ids.contains(&id) {
            warn!("Rejected start of {}: id already on the board", id);
            return Err(ScoreBoardError::DuplicateMatch { id });
        }

        if let Err(e) = game.start() {
            warn!("Rejected start of {}: {}", id, e);
            return Err(e.into());
        }

        info!(
            "Match started: {} vs {} ({})",
            game.home_team(),
            game.away_team(),
            id
        );
        self.ongoing.insert(id, game);
        Ok(id)
    }

    /// Overwrite the score of an ongoing match.
    pub fn update_score(
        &mut self,
        id: MatchId,
        home: i32,
        away: i32,
    ) -> Result<(), ScoreBoardError> {
        let game = self.ongoing.get_mut(&id).ok_or_else(|| {
            warn!("Cannot update {}: not in progress", id);
            ScoreBoardError::UnknownMatch { id }
        })?;

        game.update_score(home, away)?;
        debug!("Score update: {}", game);
        Ok(())
    }

    /// Move an ongoing match to the finished list and freeze its score.
    pub fn finish_game(&mut self, id: MatchId) -> Result<(), ScoreBoardError> {
        let mut game = self.ongoing.remove(&id).ok_or_else(|| {
            warn!("Cannot finish {}: not in progress", id);
            ScoreBoardError::UnknownMatch { id }
        })?;

        game.finish();
        info!("Match finished: {} ({})", game, id);
        self.finished_ids.insert(id);
        self.finished.push(game);
        Ok(())
    }

    /// Finished matches, highest total first, most recent kick-off first on ties.
    pub fn finished_summary(&self) -> Vec<&Match> {
        ranking::rank(&self.finished)
    }

    /// Look a match up by id, whether ongoing or finished.
    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.ongoing
            .get(&id)
            .or_else(|| self.finished.iter().find(|m| m.id() == id))
    }

    pub fn is_ongoing(&self, id: MatchId) -> bool {
        self.ongoing.contains_key(&id)
    }

    pub fn is_finished(&self, id: MatchId) -> bool {
        self.finished_ids.contains(&id)
    }

    /// Ongoing matches in kick-off order.
    pub fn ongoing(&self) -> Vec<&Match> {
        let mut games: Vec<&Match> = self.ongoing.values().collect();
        games.sort_by_key(|m| m.kick_off());
        games
    }

    pub fn ongoing_len(&self) -> usize {
        self.ongoing.len()
    }

    pub fn finished_len(&self) -> usize {
        self.finished.len()
    }
}
