//! Group stage: pool generation, round-robin match lists and result recording.

use crate::logic::scoring::MatchResult;
use crate::models::{Match, MatchStatus, Participant, Pool, PoolEntry, PoolId, TournamentError};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Fewest participants that can be split into pools.
pub const MIN_POOL_PARTICIPANTS: usize = 3;

/// Options for [`generate_pools`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolOptions {
    /// Seed for the unseeded-participant shuffle. None draws from OS entropy.
    pub shuffle_seed: Option<u64>,
}

/// Split participants into `pool_count` pools and build each pool's round-robin.
///
/// Seeded participants go out in seed order, one per pool in turn, so top seeds
/// land in different pools. Unseeded participants follow in random order, each
/// into the smallest pool, preferring pools with fewer members of the same club.
pub fn generate_pools(
    participants: &[Participant],
    pool_count: usize,
    options: &PoolOptions,
) -> Result<Vec<Pool>, TournamentError> {
    let mut rng = match options.shuffle_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_pools_with_rng(participants, pool_count, &mut rng)
}

/// Same as [`generate_pools`] with a caller-supplied random source.
pub fn generate_pools_with_rng<R: Rng + ?Sized>(
    participants: &[Participant],
    pool_count: usize,
    rng: &mut R,
) -> Result<Vec<Pool>, TournamentError> {
    if participants.len() < MIN_POOL_PARTICIPANTS {
        return Err(TournamentError::NotEnoughParticipants {
            required: MIN_POOL_PARTICIPANTS,
            found: participants.len(),
        });
    }
    if pool_count < 1 || pool_count > participants.len() {
        return Err(TournamentError::InvalidPoolCount {
            pool_count,
            participants: participants.len(),
        });
    }

    let mut pools: Vec<Pool> = (0..pool_count)
        .map(|i| Pool {
            id: random_pool_id(rng),
            name: pool_name(i),
            entries: Vec::new(),
            matches: Vec::new(),
        })
        .collect();

    let mut seeded: Vec<&Participant> = participants.iter().filter(|p| p.is_seeded()).collect();
    seeded.sort_by_key(|p| p.seed);
    let mut unseeded: Vec<&Participant> = participants.iter().filter(|p| !p.is_seeded()).collect();
    unseeded.shuffle(rng);

    for (i, p) in seeded.iter().enumerate() {
        pools[i % pool_count].entries.push(PoolEntry::new((*p).clone()));
    }
    for p in unseeded {
        // Smallest pool first, then fewest clubmates; ties keep pool order.
        let target = pools
            .iter_mut()
            .min_by_key(|pool| (pool.entries.len(), pool.club_count(p.club_id.as_deref())));
        if let Some(pool) = target {
            pool.entries.push(PoolEntry::new(p.clone()));
        }
    }

    for pool in &mut pools {
        pool.matches = round_robin_matches(pool.id, &pool.entries);
    }

    log::info!(
        "Generated {} pools for {} participants (sizes {:?})",
        pools.len(),
        participants.len(),
        pools.iter().map(|p| p.entries.len()).collect::<Vec<_>>()
    );
    Ok(pools)
}

/// Every pairing of entries exactly once, in entry order. Round is 0, positions run from 0.
pub fn round_robin_matches(pool_id: PoolId, entries: &[PoolEntry]) -> Vec<Match> {
    let mut matches = Vec::with_capacity(entries.len() * entries.len().saturating_sub(1) / 2);
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            let position = matches.len() as u32;
            matches.push(Match::new(
                format!("{pool_id}-m{position}"),
                a.participant.clone(),
                b.participant.clone(),
                0,
                position,
            ));
        }
    }
    matches
}

/// "Pool A" .. "Pool Z", then "Pool 27" onwards.
pub fn pool_name(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => format!("Pool {}", (b'A' + i) as char),
        _ => format!("Pool {}", index + 1),
    }
}

fn random_pool_id<R: Rng + ?Sized>(rng: &mut R) -> PoolId {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Commit a calculated result to a pool match, stamped now.
pub fn record_pool_result(
    pool: &Pool,
    match_id: &str,
    result: &MatchResult,
) -> Result<Pool, TournamentError> {
    record_pool_result_at(pool, match_id, result, Utc::now())
}

/// Commit a calculated result to a pool match.
///
/// The result's score must be ordered participant1 then participant2 and favour the
/// named winner; it is not otherwise re-validated.
pub fn record_pool_result_at(
    pool: &Pool,
    match_id: &str,
    result: &MatchResult,
    at: DateTime<Utc>,
) -> Result<Pool, TournamentError> {
    let mut pool = pool.clone();
    let m = pool
        .matches
        .iter_mut()
        .find(|m| m.id == match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_owned()))?;
    if m.status.is_decided() {
        return Err(TournamentError::MatchAlreadyCompleted(m.id.clone()));
    }
    if !m.has_participant(&result.winner_id) {
        return Err(TournamentError::WinnerNotInMatch {
            match_id: m.id.clone(),
            winner_id: result.winner_id.clone(),
        });
    }
    let (wins1, wins2) = result.score.set_wins();
    let winner_is_first = m
        .participant1
        .as_ref()
        .is_some_and(|p| p.id == result.winner_id);
    let winner_leads = if winner_is_first { wins1 > wins2 } else { wins2 > wins1 };
    if !winner_leads {
        return Err(TournamentError::ScoreWinnerMismatch {
            match_id: m.id.clone(),
            winner_id: result.winner_id.clone(),
        });
    }
    m.score = Some(result.score.clone());
    m.winner_id = Some(result.winner_id.clone());
    m.status = MatchStatus::Completed;
    m.completed_at = Some(at);
    log::debug!("Pool {} match {} won by {}", pool.name, match_id, result.winner_id);
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_names() {
        assert_eq!(pool_name(0), "Pool A");
        assert_eq!(pool_name(25), "Pool Z");
        assert_eq!(pool_name(26), "Pool 27");
    }

    #[test]
    fn round_robin_positions_are_sequential() {
        let entries: Vec<PoolEntry> = ["a", "b", "c", "d"]
            .into_iter()
            .map(|id| PoolEntry::new(Participant::new(id)))
            .collect();
        let matches = round_robin_matches(PoolId::nil(), &entries);
        assert_eq!(matches.len(), 6);
        for (i, m) in matches.iter().enumerate() {
            assert_eq!(m.position, i as u32);
            assert_eq!(m.round, 0);
            assert_eq!(m.status, MatchStatus::Scheduled);
        }
    }

    #[test]
    fn same_seed_same_pools() {
        let participants: Vec<Participant> = (0..10).map(|i| Participant::new(format!("p{i}"))).collect();
        let options = PoolOptions { shuffle_seed: Some(7) };
        let a = generate_pools(&participants, 3, &options).unwrap();
        let b = generate_pools(&participants, 3, &options).unwrap();
        assert_eq!(a, b);
    }
}
