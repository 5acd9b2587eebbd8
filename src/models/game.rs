//! Matches (pool and bracket), their status, and set-based scores.

use crate::models::participant::{Participant, ParticipantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match. Deterministic, derived from its pool or bracket.
pub type MatchId = String;

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    /// Decided without play (bye or no-show).
    Walkover,
    Retired,
    Disqualified,
}

impl MatchStatus {
    /// True once the match has a winner, however it was decided.
    pub fn is_decided(self) -> bool {
        match self {
            MatchStatus::Scheduled | MatchStatus::InProgress => false,
            MatchStatus::Completed
            | MatchStatus::Walkover
            | MatchStatus::Retired
            | MatchStatus::Disqualified => true,
        }
    }
}

/// Points of one set, side 1 then side 2.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetScore {
    pub score1: i32,
    pub score2: i32,
}

impl SetScore {
    pub fn new(score1: i32, score2: i32) -> Self {
        Self { score1, score2 }
    }
}

/// A match score: 1 to 3 sets in playing order.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub sets: Vec<SetScore>,
}

impl Score {
    pub fn new(sets: Vec<SetScore>) -> Self {
        Self { sets }
    }

    /// Build from `(score1, score2)` pairs.
    pub fn from_pairs(pairs: &[(i32, i32)]) -> Self {
        Self {
            sets: pairs.iter().map(|&(a, b)| SetScore::new(a, b)).collect(),
        }
    }

    /// Sets won by side 1 and side 2. Drawn sets count for neither.
    pub fn set_wins(&self) -> (u32, u32) {
        self.sets.iter().fold((0, 0), |(w1, w2), s| {
            if s.score1 > s.score2 {
                (w1 + 1, w2)
            } else if s.score2 > s.score1 {
                (w1, w2 + 1)
            } else {
                (w1, w2)
            }
        })
    }

    /// Total points scored by side 1 and side 2 over all sets. Saturates on unvalidated input.
    pub fn points(&self) -> (i32, i32) {
        self.sets.iter().fold((0, 0), |(p1, p2), s| {
            (p1.saturating_add(s.score1), p2.saturating_add(s.score2))
        })
    }
}

/// A pool (round-robin) match. Round is always 0 inside pools.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub participant1: Option<Participant>,
    pub participant2: Option<Participant>,
    /// None if not yet played.
    pub score: Option<Score>,
    pub status: MatchStatus,
    pub winner_id: Option<ParticipantId>,
    pub round: u32,
    pub position: u32,
    /// Court the match is played on, once assigned.
    pub court_number: Option<u32>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Match {
    /// A scheduled match between two participants.
    pub fn new(
        id: impl Into<MatchId>,
        participant1: Participant,
        participant2: Participant,
        round: u32,
        position: u32,
    ) -> Self {
        Self {
            id: id.into(),
            participant1: Some(participant1),
            participant2: Some(participant2),
            score: None,
            status: MatchStatus::Scheduled,
            winner_id: None,
            round,
            position,
            court_number: None,
            started_at: None,
            completed_at: None,
        }
    }

    /// True if the participant occupies either slot.
    pub fn has_participant(&self, id: &str) -> bool {
        slot_is(&self.participant1, id) || slot_is(&self.participant2, id)
    }
}

/// A single-elimination match. Linked forward to the match its winner feeds.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketMatch {
    pub id: MatchId,
    pub participant1: Option<Participant>,
    pub participant2: Option<Participant>,
    pub score: Option<Score>,
    pub status: MatchStatus,
    pub winner_id: Option<ParticipantId>,
    /// 1-based elimination round.
    pub round: u32,
    /// 0-based position within the round.
    pub position: u32,
    /// None for the final.
    pub next_match_id: Option<MatchId>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl BracketMatch {
    /// An empty shell waiting for participants.
    pub fn shell(id: impl Into<MatchId>, round: u32, position: u32, next_match_id: Option<MatchId>) -> Self {
        Self {
            id: id.into(),
            participant1: None,
            participant2: None,
            score: None,
            status: MatchStatus::Scheduled,
            winner_id: None,
            round,
            position,
            next_match_id,
            started_at: None,
            completed_at: None,
        }
    }

    pub fn has_participant(&self, id: &str) -> bool {
        slot_is(&self.participant1, id) || slot_is(&self.participant2, id)
    }

    /// The participant with the given id, if they play in this match.
    pub fn participant(&self, id: &str) -> Option<&Participant> {
        [&self.participant1, &self.participant2]
            .into_iter()
            .flatten()
            .find(|p| p.id == id)
    }

    /// Number of occupied slots (0, 1 or 2).
    pub fn filled_slots(&self) -> usize {
        self.participant1.is_some() as usize + self.participant2.is_some() as usize
    }
}

fn slot_is(slot: &Option<Participant>, id: &str) -> bool {
    slot.as_ref().is_some_and(|p| p.id == id)
}
