//! Playing courts and their availability.

use crate::models::game::MatchId;
use serde::{Deserialize, Serialize};

/// Availability of a court.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourtStatus {
    #[default]
    Available,
    InUse,
    /// Not usable for this tournament (set at setup).
    Closed,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: String,
    pub number: u32,
    pub name: String,
    pub status: CourtStatus,
    pub current_match_id: Option<MatchId>,
}

impl Court {
    /// An available court with no match on it.
    pub fn new(id: impl Into<String>, number: u32, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number,
            name: name.into(),
            status: CourtStatus::Available,
            current_match_id: None,
        }
    }

    /// A court that exists but is not in service.
    pub fn closed(id: impl Into<String>, number: u32, name: impl Into<String>) -> Self {
        Self {
            status: CourtStatus::Closed,
            ..Self::new(id, number, name)
        }
    }
}
