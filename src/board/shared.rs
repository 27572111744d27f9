use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::models::{Match, MatchId};
use super::ScoreBoard;
use crate::errors::ScoreBoardError;

/// Thread-safe scoreboard handle (single board behind one mutex).
///
/// Every call takes the lock for its whole duration, so callers always see
/// `ongoing` and `finished` in agreement. Queries hand back clones.
#[derive(Clone, Default)]
pub struct SharedScoreBoard {
    board: Arc<Mutex<ScoreBoard>>,
}

impl SharedScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // Board methods check before they mutate, so a panic elsewhere cannot
    // leave a half-applied change behind; a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, ScoreBoard> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start_game(&self, game: Match) -> Result<MatchId, ScoreBoardError> {
        self.lock().start_game(game)
    }

    pub fn update_score(&self, id: MatchId, home: i32, away: i32) -> Result<(), ScoreBoardError> {
        self.lock().update_score(id, home, away)
    }

    pub fn finish_game(&self, id: MatchId) -> Result<(), ScoreBoardError> {
        self.lock().finish_game(id)
    }

    pub fn finished_summary(&self) -> Vec<Match> {
        self.lock().finished_summary().into_iter().cloned().collect()
    }

    pub fn ongoing(&self) -> Vec<Match> {
        self.lock().ongoing().into_iter().cloned().collect()
    }

    pub fn get(&self, id: MatchId) -> Option<Match> {
        self.lock().get(id).cloned()
    }

    /// Run `f` against one consistent view of the board.
    pub fn read<R>(&self, f: impl FnOnce(&ScoreBoard) -> R) -> R {
        f(&self.lock())
    }
}

impl From<ScoreBoard> for SharedScoreBoard {
    fn from(board: ScoreBoard) -> Self {
        SharedScoreBoard {
            board: Arc::new(Mutex::new(board)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_one_board() {
        let shared = SharedScoreBoard::new();
        let other = shared.clone();

        let id = shared.start_game(Match::new("Team A", "Team B")).unwrap();
        other.update_score(id, 1, 0).unwrap();
        other.finish_game(id).unwrap();

        let summary = shared.finished_summary();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].summary(), "Team A 1 - Team B 0");
    }

    #[test]
    fn test_errors_surface_through_handle() {
        let shared = SharedScoreBoard::new();
        let id = MatchId::new();
        assert_eq!(
            shared.finish_game(id),
            Err(ScoreBoardError::UnknownMatch { id })
        );
    }

    #[test]
    fn test_concurrent_lifecycles() {
        let shared = SharedScoreBoard::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let board = shared.clone();
                thread::spawn(move || {
                    let id = board
                        .start_game(Match::new(format!("Home {i}"), format!("Away {i}")))
                        .unwrap();
                    board.update_score(id, i, 0).unwrap();
                    board.finish_game(id).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let totals: Vec<u64> = shared
            .finished_summary()
            .iter()
            .map(|m| m.total_score())
            .collect();
        assert_eq!(totals, vec![7, 6, 5, 4, 3, 2, 1, 0]);
        assert!(shared.read(|b| b.ongoing_len() == 0 && b.finished_len() == 8));
    }

    #[test]
    fn test_wraps_existing_board() {
        let mut board = ScoreBoard::new();
        let id = board.start_game(Match::new("Team A", "Team B")).unwrap();
        let shared = SharedScoreBoard::from(board);

        assert!(shared.get(id).is_some());
        assert_eq!(shared.ongoing().len(), 1);
    }
}
