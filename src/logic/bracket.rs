//! Single-elimination bracket generation: sizing, standard seeding and byes.

use crate::models::{Bracket, BracketId, BracketMatch, MatchStatus, Participant, TournamentError};
use uuid::Uuid;

/// Build a bracket for the given entrants. Input order is seed order: the first
/// participant is seed 1. Round-1 matches with a single entrant are walkovers and
/// their entrant is already placed in round 2.
pub fn generate_bracket(
    participants: &[Participant],
    bracket_id: Option<BracketId>,
) -> Result<Bracket, TournamentError> {
    if participants.len() < 2 {
        return Err(TournamentError::NotEnoughBracketEntrants(participants.len()));
    }
    let size = participants.len().next_power_of_two();
    let rounds = size.trailing_zeros();
    let id = bracket_id.unwrap_or_else(Uuid::new_v4);

    let mut matches = Vec::with_capacity(size - 1);
    for round in 1..=rounds {
        for position in 0..(size >> round) as u32 {
            let next = (round < rounds).then(|| Bracket::match_id(id, round + 1, position / 2));
            matches.push(BracketMatch::shell(
                Bracket::match_id(id, round, position),
                round,
                position,
                next,
            ));
        }
    }

    // Round 1 occupies the first size/2 slots of the arena.
    for (m, pair) in matches.iter_mut().zip(standard_seeding(size).chunks_exact(2)) {
        m.participant1 = participants.get(pair[0] - 1).cloned();
        m.participant2 = participants.get(pair[1] - 1).cloned();
    }

    let mut bracket = Bracket { id, rounds, matches };
    let byes: Vec<usize> = bracket
        .matches
        .iter()
        .enumerate()
        .filter(|(_, m)| m.round == 1 && m.filled_slots() == 1)
        .map(|(i, _)| i)
        .collect();
    for &index in &byes {
        resolve_bye(&mut bracket, index)?;
    }

    log::info!(
        "Generated bracket {} for {} entrants: {} rounds, {} byes",
        bracket.id,
        participants.len(),
        rounds,
        byes.len()
    );
    Ok(bracket)
}

/// Seed numbers (1-based) in bracket slot order, paired two per round-1 match.
///
/// Seed k meets seed `size + 1 - k`, and each half of the draw holds one of
/// seeds 1 and 2, so they can only meet in the final.
pub fn standard_seeding(size: usize) -> Vec<usize> {
    if size <= 1 {
        return vec![1];
    }
    standard_seeding(size / 2)
        .into_iter()
        .flat_map(|seed| [seed, size + 1 - seed])
        .collect()
}

/// Seeded participants by ascending seed, then unseeded ones in their given order.
///
/// [`generate_bracket`] seeds by position; use this first to seed by `Participant::seed`.
pub fn seed_order(participants: &[Participant]) -> Vec<Participant> {
    let mut ordered = participants.to_vec();
    ordered.sort_by_key(|p| (p.seed.is_none(), p.seed));
    ordered
}

fn resolve_bye(bracket: &mut Bracket, index: usize) -> Result<(), TournamentError> {
    let m = &mut bracket.matches[index];
    let Some(occupant) = m.participant1.clone().or_else(|| m.participant2.clone()) else {
        return Ok(());
    };
    m.status = MatchStatus::Walkover;
    m.winner_id = Some(occupant.id.clone());
    log::debug!("Bye in {}: {} advances", m.id, occupant.id);
    advance_winner(bracket, index, occupant)
}

/// Place a winner into the linked next match: top slot from an even position, bottom from odd.
///
/// A link to a match the bracket does not hold is an error.
pub(crate) fn advance_winner(
    bracket: &mut Bracket,
    index: usize,
    winner: Participant,
) -> Result<(), TournamentError> {
    let (next_id, position) = {
        let m = &bracket.matches[index];
        (m.next_match_id.clone(), m.position)
    };
    let Some(next_id) = next_id else {
        return Ok(());
    };
    let next = bracket
        .matches
        .iter_mut()
        .find(|m| m.id == next_id)
        .ok_or(TournamentError::MatchNotFound(next_id))?;
    if position % 2 == 0 {
        next.participant1 = Some(winner);
    } else {
        next.participant2 = Some(winner);
    }
    Ok(())
}
