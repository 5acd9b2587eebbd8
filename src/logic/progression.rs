//! Recording bracket results and advancing winners.

use crate::logic::bracket::advance_winner;
use crate::models::{Bracket, MatchStatus, Score, TournamentError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a bracket match was decided without being played out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForfeitKind {
    Walkover,
    Retired,
    Disqualified,
}

impl From<ForfeitKind> for MatchStatus {
    fn from(kind: ForfeitKind) -> Self {
        match kind {
            ForfeitKind::Walkover => MatchStatus::Walkover,
            ForfeitKind::Retired => MatchStatus::Retired,
            ForfeitKind::Disqualified => MatchStatus::Disqualified,
        }
    }
}

/// Record a played result, stamped now. See [`progress_winner_at`].
pub fn progress_winner(
    bracket: &Bracket,
    match_id: &str,
    winner_id: &str,
    score: &Score,
) -> Result<Bracket, TournamentError> {
    progress_winner_at(bracket, match_id, winner_id, score, Utc::now())
}

/// Complete a bracket match and move the winner into the match it feeds.
///
/// The score is stored as given; validate it with `calculate_match_result` first.
pub fn progress_winner_at(
    bracket: &Bracket,
    match_id: &str,
    winner_id: &str,
    score: &Score,
    at: DateTime<Utc>,
) -> Result<Bracket, TournamentError> {
    decide(bracket, match_id, winner_id, MatchStatus::Completed, Some(score.clone()), at)
}

/// Decide a match by walkover, retirement or disqualification, stamped now.
pub fn record_forfeit(
    bracket: &Bracket,
    match_id: &str,
    winner_id: &str,
    kind: ForfeitKind,
    partial_score: Option<Score>,
) -> Result<Bracket, TournamentError> {
    record_forfeit_at(bracket, match_id, winner_id, kind, partial_score, Utc::now())
}

pub fn record_forfeit_at(
    bracket: &Bracket,
    match_id: &str,
    winner_id: &str,
    kind: ForfeitKind,
    partial_score: Option<Score>,
    at: DateTime<Utc>,
) -> Result<Bracket, TournamentError> {
    decide(bracket, match_id, winner_id, kind.into(), partial_score, at)
}

fn decide(
    bracket: &Bracket,
    match_id: &str,
    winner_id: &str,
    status: MatchStatus,
    score: Option<Score>,
    at: DateTime<Utc>,
) -> Result<Bracket, TournamentError> {
    let mut bracket = bracket.clone();
    let index = bracket
        .match_index(match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_owned()))?;

    let m = &mut bracket.matches[index];
    if m.status.is_decided() {
        return Err(TournamentError::MatchAlreadyCompleted(m.id.clone()));
    }
    let winner = m
        .participant(winner_id)
        .cloned()
        .ok_or_else(|| TournamentError::WinnerNotInMatch {
            match_id: m.id.clone(),
            winner_id: winner_id.to_owned(),
        })?;
    if m.filled_slots() < 2 {
        return Err(TournamentError::MatchNotReady(m.id.clone()));
    }

    m.winner_id = Some(winner.id.clone());
    m.score = score;
    m.status = status;
    m.completed_at = Some(at);
    let is_final = m.next_match_id.is_none();
    log::debug!("Match {} decided ({:?}): {} advances", match_id, status, winner.id);

    if is_final {
        log::info!("Bracket {} won by {}", bracket.id, winner.id);
    }
    advance_winner(&mut bracket, index, winner)?;
    Ok(bracket)
}
