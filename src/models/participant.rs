//! Participant data structure.

use serde::{Deserialize, Serialize};

/// Unique identifier for a participant, supplied by registration.
pub type ParticipantId = String;

/// A registered participant (player or pair). Immutable input to the engine.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    /// Seed rank (1 = strongest). Unseeded participants have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Club affiliation, used to spread clubmates across pools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_id: Option<String>,
}

impl Participant {
    /// Create an unseeded participant without a club.
    pub fn new(id: impl Into<ParticipantId>) -> Self {
        Self {
            id: id.into(),
            seed: None,
            club_id: None,
        }
    }

    /// Builder: set the seed rank.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set the club affiliation.
    pub fn with_club(mut self, club_id: impl Into<String>) -> Self {
        self.club_id = Some(club_id.into());
        self
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }
}
