use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::errors::MatchError;

/// Process-wide start counter; breaks ties between kick-offs that land on the
/// same clock reading.
static KICK_OFF_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Unique identifier for a match.
///
/// Random v4 UUID, so no coordination is needed between boards or threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The moment a match started.
///
/// Ordered by wall-clock instant first, then by start sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct KickOff {
    pub at: DateTime<Utc>,
    pub seq: u64,
}

impl KickOff {
    fn now() -> Self {
        KickOff {
            at: Utc::now(),
            seq: KICK_OFF_SEQUENCE.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// One contest between a home and an away side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    id: MatchId,
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    kick_off: Option<KickOff>,
    finished_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Create an unstarted match at 0-0. Team names are taken as given.
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Match {
            id: MatchId::new(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score: 0,
            away_score: 0,
            kick_off: None,
            finished_at: None,
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn kick_off(&self) -> Option<KickOff> {
        self.kick_off
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.kick_off.map(|k| k.at)
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn is_started(&self) -> bool {
        self.kick_off.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Record the kick-off. A match can only be started once.
    pub fn start(&mut self) -> Result<(), MatchError> {
        if self.kick_off.is_some() {
            return Err(MatchError::AlreadyStarted { id: self.id });
        }
        self.kick_off = Some(KickOff::now());
        Ok(())
    }

    /// Overwrite both scores.
    ///
    /// Scores may go down (corrections are allowed) but never below zero.
    /// Fails without touching the scores if the match is already finished.
    pub fn update_score(&mut self, home: i32, away: i32) -> Result<(), MatchError> {
        if self.is_finished() {
            return Err(MatchError::Finished { id: self.id });
        }
        let (home_score, away_score) = match (u32::try_from(home), u32::try_from(away)) {
            (Ok(h), Ok(a)) => (h, a),
            _ => return Err(MatchError::InvalidScore { home, away }),
        };
        self.home_score = home_score;
        self.away_score = away_score;
        Ok(())
    }

    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// `"<home> <homeScore> - <away> <awayScore>"`
    pub fn summary(&self) -> String {
        self.to_string()
    }

    /// Freeze the score. Only the registry finishes matches.
    pub(crate) fn finish(&mut self) {
        if self.finished_at.is_none() {
            self.finished_at = Some(Utc::now());
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
