//! Single-elimination bracket stored as an arena of linked matches.

use crate::models::game::{BracketMatch, MatchId};
use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a bracket.
pub type BracketId = Uuid;

/// All matches of a bracket, ordered by round then position.
/// Matches reference each other by id through `next_match_id`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    pub id: BracketId,
    pub rounds: u32,
    pub matches: Vec<BracketMatch>,
}

impl Bracket {
    /// Deterministic match id for a round/position slot.
    pub fn match_id(bracket_id: BracketId, round: u32, position: u32) -> MatchId {
        format!("{bracket_id}-r{round}-m{position}")
    }

    /// Number of first-round entrant slots (a power of two).
    pub fn size(&self) -> usize {
        1usize << self.rounds
    }

    pub fn match_index(&self, match_id: &str) -> Option<usize> {
        self.matches.iter().position(|m| m.id == match_id)
    }

    pub fn match_by_id(&self, match_id: &str) -> Option<&BracketMatch> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Matches of one round, in position order.
    pub fn round_matches(&self, round: u32) -> impl Iterator<Item = &BracketMatch> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.matches.iter().find(|m| m.next_match_id.is_none())
    }

    /// Winner of the final, once decided.
    pub fn champion(&self) -> Option<&ParticipantId> {
        self.final_match().and_then(|m| m.winner_id.as_ref())
    }
}
