//! Score validation and match result calculation under the fixed rally-point rules.
//!
//! A set is won at 21 with the opponent below 20. From 20-20 a set continues until
//! one side leads by 2, capped at 30-29. A match is best of three sets.

use crate::models::{ParticipantId, Score, SetScore};
use serde::Serialize;
use thiserror::Error;

/// Points needed to win a set without deuce.
pub const POINTS_TO_WIN: i32 = 21;
/// Highest score a set can reach (only as 30-29).
pub const POINT_CAP: i32 = 30;
/// Sets needed to win a match.
pub const SETS_TO_WIN: u32 = 2;
/// Most sets a match can have.
pub const MAX_SETS: usize = 3;

/// Why a score was rejected. Set numbers are 1-based.
#[derive(Clone, Debug, Eq, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreError {
    #[error("Score must contain at least one set")]
    NoSets,

    #[error("Score cannot contain more than 3 sets (got {count})")]
    TooManySets { count: usize },

    #[error("Set {set}: points must be between 0 and 30 (got {score1}-{score2})")]
    OutOfRange { set: usize, score1: i32, score2: i32 },

    #[error("Set {set}: {score1}-{score2} is not finished, the winner needs 21 points")]
    NotWon { set: usize, score1: i32, score2: i32 },

    #[error("Set {set}: {score1}-{score2} goes past 21 without a 20-20 deuce")]
    Overshoot { set: usize, score1: i32, score2: i32 },

    #[error("Set {set}: {score1}-{score2} is a deuce that must be won by 2 points")]
    Deuce { set: usize, score1: i32, score2: i32 },

    #[error("Set {set}: {score1}-{score2} exceeds the 30-29 cap")]
    Cap { set: usize, score1: i32, score2: i32 },

    #[error("Set {set}: match should end when a player wins 2 sets")]
    ExtraSet { set: usize },

    #[error("No player won 2 sets")]
    Undecided,
}

/// Outcome of [`validate_score`]. Serializes as `{"valid": .., "errors": [..]}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ScoreValidation {
    valid: bool,
    errors: Vec<ScoreError>,
}

impl ScoreValidation {
    fn from_errors(errors: Vec<ScoreError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[ScoreError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ScoreError> {
        self.errors
    }

    /// Error messages for display.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Check a single set. `set` is the 1-based set number used in error messages.
pub fn validate_set(set: usize, score: SetScore) -> Result<(), ScoreError> {
    let SetScore { score1, score2 } = score;
    if !(0..=POINT_CAP).contains(&score1) || !(0..=POINT_CAP).contains(&score2) {
        return Err(ScoreError::OutOfRange { set, score1, score2 });
    }
    let high = score1.max(score2);
    let low = score1.min(score2);

    if high < POINTS_TO_WIN {
        return Err(ScoreError::NotWon { set, score1, score2 });
    }
    if high == POINT_CAP {
        return if low == POINT_CAP - 1 {
            Ok(())
        } else {
            Err(ScoreError::Cap { set, score1, score2 })
        };
    }
    if low < POINTS_TO_WIN - 1 {
        // No deuce reached: the set ends exactly at 21.
        return if high == POINTS_TO_WIN {
            Ok(())
        } else {
            Err(ScoreError::Overshoot { set, score1, score2 })
        };
    }
    if high - low == 2 {
        Ok(())
    } else {
        Err(ScoreError::Deuce { set, score1, score2 })
    }
}

/// Validate a full match score: set count, every set, and no sets after the match is decided.
pub fn validate_score(score: &Score) -> ScoreValidation {
    let sets = &score.sets;
    if sets.is_empty() {
        return ScoreValidation::from_errors(vec![ScoreError::NoSets]);
    }
    if sets.len() > MAX_SETS {
        return ScoreValidation::from_errors(vec![ScoreError::TooManySets { count: sets.len() }]);
    }

    let mut errors: Vec<ScoreError> = sets
        .iter()
        .enumerate()
        .filter_map(|(i, &s)| validate_set(i + 1, s).err())
        .collect();

    // Only a valid prefix can decide the match.
    let (mut wins1, mut wins2) = (0, 0);
    for (i, s) in sets.iter().enumerate() {
        if validate_set(i + 1, *s).is_err() {
            break;
        }
        if s.score1 > s.score2 {
            wins1 += 1;
        } else {
            wins2 += 1;
        }
        if (wins1 == SETS_TO_WIN || wins2 == SETS_TO_WIN) && i + 1 < sets.len() {
            errors.push(ScoreError::ExtraSet { set: i + 2 });
            break;
        }
    }

    ScoreValidation::from_errors(errors)
}

/// A validated, decided match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub winner_id: ParticipantId,
    pub score: Score,
}

#[derive(Clone, Debug, Eq, PartialEq, Error, Serialize)]
#[serde(tag = "error", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchResultError {
    /// Score breaks the rules or does not decide the match.
    #[error("Invalid score")]
    InvalidScore { errors: Vec<ScoreError> },
}

/// Validate the score and name the side that won two sets.
pub fn calculate_match_result(
    participant1_id: &str,
    participant2_id: &str,
    score: &Score,
) -> Result<MatchResult, MatchResultError> {
    let validation = validate_score(score);
    if !validation.is_valid() {
        log::debug!(
            "Rejected score for {} vs {}: {:?}",
            participant1_id,
            participant2_id,
            validation.messages()
        );
        return Err(MatchResultError::InvalidScore {
            errors: validation.into_errors(),
        });
    }

    let (wins1, wins2) = score.set_wins();
    let winner_id = if wins1 >= SETS_TO_WIN {
        participant1_id
    } else if wins2 >= SETS_TO_WIN {
        participant2_id
    } else {
        return Err(MatchResultError::InvalidScore {
            errors: vec![ScoreError::Undecided],
        });
    };

    Ok(MatchResult {
        winner_id: winner_id.to_owned(),
        score: score.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(pairs: &[(i32, i32)]) -> Score {
        Score::from_pairs(pairs)
    }

    #[test]
    fn set_rules() {
        assert!(validate_set(1, SetScore::new(21, 19)).is_ok());
        assert!(validate_set(1, SetScore::new(21, 18)).is_ok());
        assert!(validate_set(1, SetScore::new(0, 21)).is_ok());
        assert!(validate_set(1, SetScore::new(22, 20)).is_ok());
        assert!(validate_set(1, SetScore::new(27, 29)).is_ok());
        assert!(validate_set(1, SetScore::new(30, 29)).is_ok());
        assert_eq!(
            validate_set(2, SetScore::new(20, 18)),
            Err(ScoreError::NotWon { set: 2, score1: 20, score2: 18 })
        );
        assert!(matches!(validate_set(1, SetScore::new(21, 20)), Err(ScoreError::Deuce { .. })));
        assert!(matches!(validate_set(1, SetScore::new(25, 20)), Err(ScoreError::Deuce { .. })));
        assert!(matches!(validate_set(1, SetScore::new(30, 28)), Err(ScoreError::Cap { .. })));
        assert!(matches!(validate_set(1, SetScore::new(23, 10)), Err(ScoreError::Overshoot { .. })));
        assert!(matches!(validate_set(1, SetScore::new(-1, 21)), Err(ScoreError::OutOfRange { .. })));
        assert!(matches!(validate_set(1, SetScore::new(31, 29)), Err(ScoreError::OutOfRange { .. })));
    }

    #[test]
    fn three_set_match_is_valid() {
        assert!(validate_score(&score(&[(21, 15), (18, 21), (30, 29)])).is_valid());
    }

    #[test]
    fn extra_set_not_reported_when_earlier_set_invalid() {
        let v = validate_score(&score(&[(21, 15), (20, 18), (21, 10)]));
        assert_eq!(
            v.errors(),
            [ScoreError::NotWon { set: 2, score1: 20, score2: 18 }]
        );
    }

    #[test]
    fn single_set_is_valid_but_undecided() {
        let s = score(&[(21, 15)]);
        assert!(validate_score(&s).is_valid());
        assert_eq!(
            calculate_match_result("p1", "p2", &s),
            Err(MatchResultError::InvalidScore {
                errors: vec![ScoreError::Undecided]
            })
        );
    }

    #[test]
    fn second_side_wins_in_three() {
        let result = calculate_match_result("p1", "p2", &score(&[(21, 15), (19, 21), (22, 24)])).unwrap();
        assert_eq!(result.winner_id, "p2");
    }
}
