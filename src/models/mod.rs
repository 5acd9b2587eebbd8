//! Data structures for the tournament: participants, pools, brackets, matches, courts.

mod bracket;
mod court;
mod error;
mod game;
mod participant;
mod pool;

pub use bracket::{Bracket, BracketId};
pub use court::{Court, CourtStatus};
pub use error::TournamentError;
pub use game::{BracketMatch, Match, MatchId, MatchStatus, Score, SetScore};
pub use participant::{Participant, ParticipantId};
pub use pool::{Pool, PoolEntry, PoolId, PoolRanking};
