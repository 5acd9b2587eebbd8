//! Final selection: pick bracket entrants from pool standings.

use crate::logic::standings::calculate_pool_rankings;
use crate::models::{Participant, Pool, PoolRanking};
use std::cmp::Reverse;

/// Select qualifiers: every pool winner, then the best runners-up until `bracket_size` is reached.
///
/// Runners-up are compared across pools by wins, point differential and points scored.
/// Returns pool winners in pool order followed by runners-up best first. The list is
/// never padded: it can be shorter than `bracket_size`, or longer when there are more
/// pools than slots.
pub fn qualify_from_pools(pools: &[Pool], bracket_size: usize) -> Vec<Participant> {
    let standings: Vec<(&Pool, Vec<PoolRanking>)> = pools
        .iter()
        .map(|pool| (pool, calculate_pool_rankings(pool)))
        .collect();

    let mut qualified: Vec<Participant> = Vec::new();
    for (pool, rankings) in &standings {
        if let Some(winner) = finisher(pool, rankings, 1) {
            push_unique(&mut qualified, winner);
        }
    }

    let remaining = bracket_size.saturating_sub(qualified.len());
    if remaining > 0 {
        let mut runners_up: Vec<(&Participant, &PoolRanking)> = standings
            .iter()
            .filter_map(|(pool, rankings)| {
                let r = rankings.iter().find(|r| r.rank == 2)?;
                Some((&pool.entry(&r.participant_id)?.participant, r))
            })
            .filter(|(p, _)| !qualified.iter().any(|q| q.id == p.id))
            .collect();
        runners_up.sort_by_key(|(_, r)| Reverse(r.sort_key()));
        for (p, _) in runners_up.into_iter().take(remaining) {
            push_unique(&mut qualified, p);
        }
    }

    if qualified.len() < bracket_size {
        log::warn!(
            "Only {} qualifiers for a bracket of {}",
            qualified.len(),
            bracket_size
        );
    }
    qualified
}

/// Copies of the pools with `is_qualified` set on the given participants' entries.
pub fn mark_qualified(pools: &[Pool], qualifiers: &[Participant]) -> Vec<Pool> {
    pools
        .iter()
        .map(|pool| {
            let mut pool = pool.clone();
            for entry in &mut pool.entries {
                entry.is_qualified = qualifiers.iter().any(|q| q.id == entry.participant.id);
            }
            pool
        })
        .collect()
}

fn finisher<'a>(pool: &'a Pool, rankings: &[PoolRanking], rank: u32) -> Option<&'a Participant> {
    let r = rankings.iter().find(|r| r.rank == rank)?;
    pool.entry(&r.participant_id).map(|e| &e.participant)
}

fn push_unique(qualified: &mut Vec<Participant>, p: &Participant) {
    if !qualified.iter().any(|q| q.id == p.id) {
        qualified.push(p.clone());
    }
}
