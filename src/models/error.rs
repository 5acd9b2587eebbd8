//! Errors for precondition failures in tournament operations.

use crate::models::court::CourtStatus;
use crate::models::game::MatchId;
use crate::models::participant::ParticipantId;
use thiserror::Error;

/// Caller misuse or violated preconditions. Expected data problems
/// (bad scores) are reported as values, not through this type.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    /// Too few participants to build pools.
    #[error("Need at least {required} participants to generate pools (got {found})")]
    NotEnoughParticipants { required: usize, found: usize },

    /// Pool count is zero or larger than the number of participants.
    #[error("Invalid pool count {pool_count} for {participants} participants")]
    InvalidPoolCount { pool_count: usize, participants: usize },

    /// A bracket needs at least two entrants.
    #[error("Need at least 2 participants to generate a bracket (got {0})")]
    NotEnoughBracketEntrants(usize),

    #[error("Match {0} not found")]
    MatchNotFound(MatchId),

    /// The match already has a winner.
    #[error("Match {0} is already completed")]
    MatchAlreadyCompleted(MatchId),

    /// The given winner does not play in the match.
    #[error("Participant {winner_id} is not in match {match_id}")]
    WinnerNotInMatch {
        match_id: MatchId,
        winner_id: ParticipantId,
    },

    /// The score's set winner is not the named winner (sides swapped).
    #[error("Score for match {match_id} does not favour {winner_id}")]
    ScoreWinnerMismatch {
        match_id: MatchId,
        winner_id: ParticipantId,
    },

    /// The match is still waiting for an opponent.
    #[error("Match {0} does not have both participants yet")]
    MatchNotReady(MatchId),

    #[error("Court {number} is not available ({status:?})")]
    CourtUnavailable { number: u32, status: CourtStatus },

    #[error("Match {match_id} is already on court {number}")]
    MatchAlreadyOnCourt { match_id: MatchId, number: u32 },

    #[error("Court {0} is not in use")]
    CourtNotInUse(u32),
}
