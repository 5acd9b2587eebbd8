//! Pool standings from completed matches.

use crate::models::{Match, MatchStatus, Pool, PoolRanking, Score};
use std::cmp::Reverse;

/// Rank a pool's entries from its completed, scored matches.
///
/// Order: wins, then point differential, then points scored, all descending.
/// Equal records keep entry order. Ranks run 1..=n.
pub fn calculate_pool_rankings(pool: &Pool) -> Vec<PoolRanking> {
    let mut rankings: Vec<PoolRanking> = pool
        .entries
        .iter()
        .map(|e| PoolRanking {
            participant_id: e.participant.id.clone(),
            wins: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
            point_differential: 0,
            rank: 0,
        })
        .collect();

    for (m, score) in pool.matches.iter().filter_map(scored_completed) {
        let (Some(p1), Some(p2)) = (&m.participant1, &m.participant2) else {
            continue;
        };
        let (points1, points2) = score.points();
        let (sets1, sets2) = score.set_wins();
        if let Some(r) = rankings.iter_mut().find(|r| r.participant_id == p1.id) {
            tally(r, points1, points2, sets1, sets2);
        }
        if let Some(r) = rankings.iter_mut().find(|r| r.participant_id == p2.id) {
            tally(r, points2, points1, sets2, sets1);
        }
    }

    for r in &mut rankings {
        r.point_differential = r.points_for.saturating_sub(r.points_against);
    }
    rankings.sort_by_key(|r| Reverse(r.sort_key()));
    for (i, r) in rankings.iter_mut().enumerate() {
        r.rank = i as u32 + 1;
    }
    rankings
}

/// Copy of the pool with each entry's record and rank recomputed.
pub fn apply_pool_rankings(pool: &Pool) -> Pool {
    let rankings = calculate_pool_rankings(pool);
    let mut pool = pool.clone();
    for entry in &mut pool.entries {
        if let Some(r) = rankings.iter().find(|r| r.participant_id == entry.participant.id) {
            entry.wins = r.wins;
            entry.losses = r.losses;
            entry.points_for = r.points_for;
            entry.points_against = r.points_against;
            entry.rank = Some(r.rank);
        }
    }
    pool
}

fn scored_completed(m: &Match) -> Option<(&Match, &Score)> {
    match (m.status, &m.score) {
        (MatchStatus::Completed, Some(score)) => Some((m, score)),
        _ => None,
    }
}

fn tally(r: &mut PoolRanking, points_for: i32, points_against: i32, sets_won: u32, sets_lost: u32) {
    r.points_for = r.points_for.saturating_add(points_for);
    r.points_against = r.points_against.saturating_add(points_against);
    if sets_won > sets_lost {
        r.wins += 1;
    } else if sets_lost > sets_won {
        r.losses += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::group_play::round_robin_matches;
    use crate::models::{Participant, PoolEntry, PoolId};

    #[test]
    fn unplayed_pool_keeps_entry_order() {
        let entries: Vec<PoolEntry> = ["a", "b", "c"]
            .into_iter()
            .map(|id| PoolEntry::new(Participant::new(id)))
            .collect();
        let pool = Pool {
            id: PoolId::nil(),
            name: "Pool A".into(),
            matches: round_robin_matches(PoolId::nil(), &entries),
            entries,
        };
        let ids: Vec<_> = calculate_pool_rankings(&pool)
            .into_iter()
            .map(|r| (r.participant_id, r.rank))
            .collect();
        let expected: Vec<(String, u32)> = vec![("a".into(), 1), ("b".into(), 2), ("c".into(), 3)];
        assert_eq!(ids, expected);
    }

    #[test]
    fn scored_but_not_completed_is_ignored() {
        let entries: Vec<PoolEntry> = ["a", "b", "c"]
            .into_iter()
            .map(|id| PoolEntry::new(Participant::new(id)))
            .collect();
        let mut matches = round_robin_matches(PoolId::nil(), &entries);
        matches[0].score = Some(Score::from_pairs(&[(21, 3), (21, 4)]));
        matches[0].status = MatchStatus::InProgress;
        let pool = Pool {
            id: PoolId::nil(),
            name: "Pool A".into(),
            entries,
            matches,
        };
        assert!(calculate_pool_rankings(&pool).iter().all(|r| r.wins == 0 && r.points_for == 0));
    }

    #[test]
    fn unvalidated_extreme_scores_do_not_overflow() {
        let entries: Vec<PoolEntry> = ["a", "b", "c"]
            .into_iter()
            .map(|id| PoolEntry::new(Participant::new(id)))
            .collect();
        let mut matches = round_robin_matches(PoolId::nil(), &entries);
        let extremes = [
            [(i32::MAX, 0), (i32::MAX, 0)],
            [(i32::MAX, 0), (i32::MAX, 0)],
            [(i32::MIN, i32::MAX), (i32::MIN, i32::MAX)],
        ];
        for (m, sets) in matches.iter_mut().zip(extremes) {
            m.score = Some(Score::from_pairs(&sets));
            m.status = MatchStatus::Completed;
        }
        let pool = Pool {
            id: PoolId::nil(),
            name: "Pool A".into(),
            entries,
            matches,
        };
        let rankings = calculate_pool_rankings(&pool);
        let a = rankings.iter().find(|r| r.participant_id == "a").unwrap();
        let b = rankings.iter().find(|r| r.participant_id == "b").unwrap();
        assert_eq!(a.points_for, i32::MAX);
        assert_eq!(b.point_differential, i32::MIN);
    }
}
