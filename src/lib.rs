//! Tournament competition engine: library with models and business logic.
//!
//! Pools are generated from a roster, ranked from their results, and feed a seeded
//! single-elimination bracket. Scores are validated separately from the state
//! changes that record them. Every operation returns new values and leaves its
//! inputs untouched.

pub mod logic;
pub mod models;

pub use logic::{
    apply_pool_rankings, assign_court, calculate_match_result, calculate_pool_rankings,
    generate_bracket, generate_pools, generate_pools_with_rng, mark_qualified, progress_winner,
    progress_winner_at, qualify_from_pools, record_forfeit, record_forfeit_at, record_pool_result,
    record_pool_result_at, release_court, seed_order, suggest_court, validate_score, ForfeitKind,
    MatchResult, MatchResultError, PoolOptions, ScoreError, ScoreValidation,
};
pub use models::{
    Bracket, BracketId, BracketMatch, Court, CourtStatus, Match, MatchId, MatchStatus, Participant,
    ParticipantId, Pool, PoolEntry, PoolId, PoolRanking, Score, SetScore, TournamentError,
};
