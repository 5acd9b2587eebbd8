//! Court allocation: suggest a free court, assign it to a match, release it.

use crate::models::{Court, CourtStatus, Match, TournamentError};

/// Lowest-numbered available court, if any.
pub fn suggest_court(courts: &[Court]) -> Option<&Court> {
    courts
        .iter()
        .filter(|c| c.status == CourtStatus::Available)
        .min_by_key(|c| c.number)
}

/// Put a match on a court. Returns updated copies; the inputs are untouched.
pub fn assign_court(court: &Court, game: &Match) -> Result<(Court, Match), TournamentError> {
    match court.status {
        CourtStatus::Available => {}
        CourtStatus::InUse | CourtStatus::Closed => {
            return Err(TournamentError::CourtUnavailable {
                number: court.number,
                status: court.status,
            });
        }
    }
    if let Some(number) = game.court_number {
        return Err(TournamentError::MatchAlreadyOnCourt {
            match_id: game.id.clone(),
            number,
        });
    }
    let court = Court {
        status: CourtStatus::InUse,
        current_match_id: Some(game.id.clone()),
        ..court.clone()
    };
    let game = Match {
        court_number: Some(court.number),
        ..game.clone()
    };
    log::debug!("Court {} assigned to match {}", court.number, game.id);
    Ok((court, game))
}

/// Free a court after its match. Returns an updated copy.
pub fn release_court(court: &Court) -> Result<Court, TournamentError> {
    match court.status {
        CourtStatus::InUse => {}
        CourtStatus::Available | CourtStatus::Closed => {
            return Err(TournamentError::CourtNotInUse(court.number));
        }
    }
    log::debug!("Court {} released", court.number);
    Ok(Court {
        status: CourtStatus::Available,
        current_match_id: None,
        ..court.clone()
    })
}
