//! Pool (round-robin group), its entries and the derived ranking view.

use crate::models::game::Match;
use crate::models::participant::{Participant, ParticipantId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a pool.
pub type PoolId = Uuid;

/// A participant's standing inside a pool. Only meaningful after rankings are applied.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolEntry {
    pub participant: Participant,
    pub wins: u32,
    pub losses: u32,
    pub points_for: i32,
    pub points_against: i32,
    pub rank: Option<u32>,
    pub is_qualified: bool,
}

impl PoolEntry {
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            rank: None,
            is_qualified: false,
        }
    }
}

/// Round-robin group: every entry plays every other entry once.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub id: PoolId,
    pub name: String,
    pub entries: Vec<PoolEntry>,
    pub matches: Vec<Match>,
}

impl Pool {
    pub fn entry(&self, participant_id: &str) -> Option<&PoolEntry> {
        self.entries.iter().find(|e| e.participant.id == participant_id)
    }

    pub fn match_by_id(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Entries already in this pool from the given club (0 when no club).
    pub fn club_count(&self, club_id: Option<&str>) -> usize {
        match club_id {
            Some(club) => self
                .entries
                .iter()
                .filter(|e| e.participant.club_id.as_deref() == Some(club))
                .count(),
            None => 0,
        }
    }
}

/// Standing computed from a pool's completed matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolRanking {
    pub participant_id: ParticipantId,
    pub wins: u32,
    pub losses: u32,
    pub points_for: i32,
    pub points_against: i32,
    pub point_differential: i32,
    pub rank: u32,
}

impl PoolRanking {
    /// Ordering key shared by pool ranking and runner-up selection: higher is better.
    pub fn sort_key(&self) -> (u32, i32, i32) {
        (self.wins, self.point_differential, self.points_for)
    }
}
