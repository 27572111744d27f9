//! In-memory scoreboard for live matches.
//!
//! A [`Match`] is created standalone, handed to a [`ScoreBoard`] which starts
//! it, takes score updates while it is in progress and finally moves it to the
//! finished list. [`ScoreBoard::finished_summary`] ranks finished matches by
//! total score, most recently started first on ties.

pub mod board;
pub mod config;
pub mod errors;
pub mod fixture;

pub use board::models::{KickOff, Match, MatchId};
pub use board::shared::SharedScoreBoard;
pub use board::ScoreBoard;
pub use errors::{MatchError, ScoreBoardError};
