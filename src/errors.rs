//! Error taxonomy for matches and the scoreboard registry.

use thiserror::Error;

use crate::board::models::MatchId;

/// Rejections raised by a single [`Match`](crate::Match).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Match {id} has already started")]
    AlreadyStarted { id: MatchId },

    #[error("Invalid score {home}-{away}: scores must be non-negative")]
    InvalidScore { home: i32, away: i32 },

    #[error("Match {id} is finished; its score can no longer change")]
    Finished { id: MatchId },
}

/// Rejections raised by the [`ScoreBoard`](crate::ScoreBoard) registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreBoardError {
    #[error("Match with this ID already exists: {id}")]
    DuplicateMatch { id: MatchId },

    #[error("Match with this ID is not in progress: {id}")]
    UnknownMatch { id: MatchId },

    #[error(transparent)]
    Match(#[from] MatchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_score_display() {
        let err = MatchError::InvalidScore { home: -1, away: 2 };
        assert_eq!(
            err.to_string(),
            "Invalid score -1-2: scores must be non-negative"
        );
    }

    #[test]
    fn test_unknown_match_mentions_id() {
        let id = MatchId::new();
        let err = ScoreBoardError::UnknownMatch { id };
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_match_error_passes_through_unchanged() {
        let id = MatchId::new();
        let inner = MatchError::AlreadyStarted { id };
        let outer: ScoreBoardError = inner.clone().into();
        assert_eq!(outer, ScoreBoardError::Match(inner.clone()));
        assert_eq!(outer.to_string(), inner.to_string());
    }
}
