//! Tournament business logic: pools, standings, qualification, bracket, scoring, courts.

mod bracket;
mod courts;
mod final_selection;
mod group_play;
mod progression;
mod scoring;
mod standings;

pub use bracket::{generate_bracket, seed_order, standard_seeding};
pub use courts::{assign_court, release_court, suggest_court};
pub use final_selection::{mark_qualified, qualify_from_pools};
pub use group_play::{
    generate_pools, generate_pools_with_rng, pool_name, record_pool_result, record_pool_result_at,
    round_robin_matches, PoolOptions, MIN_POOL_PARTICIPANTS,
};
pub use progression::{
    progress_winner, progress_winner_at, record_forfeit, record_forfeit_at, ForfeitKind,
};
pub use scoring::{
    calculate_match_result, validate_score, validate_set, MatchResult, MatchResultError,
    ScoreError, ScoreValidation, MAX_SETS, POINTS_TO_WIN, POINT_CAP, SETS_TO_WIN,
};
pub use standings::{apply_pool_rankings, calculate_pool_rankings};
