//! Ordering used for the finished-match summary.
//!
//! Highest total score first. Ties go to the match that kicked off later; a
//! match with no kick-off counts as the earliest possible start. The sort is
//! stable, so anything still tied keeps its input order.

use std::cmp::Ordering;

use super::models::Match;

/// Summary order between two matches.
pub fn compare(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        // `None < Some(_)`, so reversing puts unstarted matches last.
        .then_with(|| b.kick_off().cmp(&a.kick_off()))
}

/// Collect and sort matches into summary order.
pub fn rank<'a, I>(matches: I) -> Vec<&'a Match>
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut ranked: Vec<&Match> = matches.into_iter().collect();
    ranked.sort_by(|a, b| compare(a, b));
    ranked
}
