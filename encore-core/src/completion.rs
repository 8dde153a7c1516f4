/// Completion oracle: is a pool ranked enough to stop asking?
///
/// Read-only predicate, safe to re-evaluate at any time. It can disagree
/// with a selector returning no pair — focus mode runs dry while general
/// mode still sees viable low-value pairs — so hosts that need a strict
/// "done" answer ask here, not the selector.
use std::collections::HashMap;

use crate::constants::{
    COMPLETION_MAX_PAIR_SCORE, COMPLETION_MEAN_GAMES, COMPLETION_MIN_COMPARISONS,
    COMPLETION_PER_ITEM_FACTOR,
};
use crate::graph::build_beats_graph;
use crate::scoring::score_pair;
use crate::types::{compared_pairs, pair_key, Comparison, Rating};

/// The numbers behind a completion verdict.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionReport {
    /// Logged comparisons for the pool, skips included.
    pub total_comparisons: usize,
    /// Comparison floor for this pool size.
    pub required_comparisons: usize,
    /// Mean decided comparisons per item.
    pub mean_games: f64,
    /// Best score among uncompared pairs, if any remain.
    pub best_remaining_score: Option<f64>,
    pub complete: bool,
}

/// Evaluate the oracle for one pool. Complete when the pool has cleared
/// its comparison floor, every item averages enough decided games, and no
/// uncompared pair would still be worth more than
/// `COMPLETION_MAX_PAIR_SCORE` to ask about. Skipped pairs count as
/// compared here under either skip policy — a permanently skipped pair
/// must not hold a pool open forever.
pub fn completion_report(
    pool: &[i64],
    ratings: &HashMap<i64, Rating>,
    log: &[Comparison],
    transitive_depth: usize,
) -> CompletionReport {
    let total_comparisons = log.len();
    let required_comparisons =
        COMPLETION_MIN_COMPARISONS.max(COMPLETION_PER_ITEM_FACTOR * pool.len());

    let mean_games = if pool.is_empty() {
        0.0
    } else {
        let total_games: u32 = pool
            .iter()
            .map(|id| ratings.get(id).map_or(0, |r| r.games))
            .sum();
        f64::from(total_games) / pool.len() as f64
    };

    let graph = build_beats_graph(log);
    let compared = compared_pairs(log);
    let mut best_remaining_score: Option<f64> = None;
    for (i, &a) in pool.iter().enumerate() {
        for &b in &pool[i + 1..] {
            if compared.contains(&pair_key(a, b)) {
                continue;
            }
            let score = score_pair(a, b, ratings, &graph, transitive_depth);
            if best_remaining_score.is_none_or(|best| score > best) {
                best_remaining_score = Some(score);
            }
        }
    }

    let complete = total_comparisons >= required_comparisons
        && mean_games >= COMPLETION_MEAN_GAMES
        && best_remaining_score.is_none_or(|best| best <= COMPLETION_MAX_PAIR_SCORE);

    CompletionReport {
        total_comparisons,
        required_comparisons,
        mean_games,
        best_remaining_score,
        complete,
    }
}

/// Strict "is this pool done" answer.
pub fn is_complete(
    pool: &[i64],
    ratings: &HashMap<i64, Rating>,
    log: &[Comparison],
    transitive_depth: usize,
) -> bool {
    completion_report(pool, ratings, log, transitive_depth).complete
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(winner: i64, loser: i64) -> Comparison {
        Comparison { item_a: winner, item_b: loser, winner: Some(winner) }
    }

    /// Ratings for a fully compared 3-item pool where each item has seen
    /// plenty of decided games.
    fn saturated_pool() -> (Vec<i64>, HashMap<i64, Rating>, Vec<Comparison>) {
        let pool = vec![1, 2, 3];
        let ratings = [
            (1, Rating { score: 1260.0, games: 10 }),
            (2, Rating { score: 1200.0, games: 10 }),
            (3, Rating { score: 1140.0, games: 10 }),
        ]
        .into_iter()
        .collect();
        // 15 logged comparisons covering every pair repeatedly.
        let mut log = Vec::new();
        for _ in 0..5 {
            log.push(win(1, 2));
            log.push(win(2, 3));
            log.push(win(1, 3));
        }
        (pool, ratings, log)
    }

    #[test]
    fn test_saturated_pool_is_complete() {
        let (pool, ratings, log) = saturated_pool();
        let report = completion_report(&pool, &ratings, &log, 3);
        assert!(report.complete);
        assert_eq!(report.total_comparisons, 15);
        assert_eq!(report.required_comparisons, 15);
        assert!(report.best_remaining_score.is_none());
        assert!(is_complete(&pool, &ratings, &log, 3));
    }

    #[test]
    fn test_too_few_comparisons_blocks_completion() {
        let (pool, ratings, mut log) = saturated_pool();
        log.truncate(12);
        let report = completion_report(&pool, &ratings, &log, 3);
        assert!(!report.complete);
        assert_eq!(report.required_comparisons, 15);
    }

    #[test]
    fn test_low_mean_games_blocks_completion() {
        let (pool, mut ratings, log) = saturated_pool();
        ratings.insert(1, Rating { score: 1260.0, games: 1 });
        ratings.insert(2, Rating { score: 1200.0, games: 1 });
        ratings.insert(3, Rating { score: 1140.0, games: 1 });
        assert!(!is_complete(&pool, &ratings, &log, 3));
    }

    #[test]
    fn test_valuable_remaining_pair_blocks_completion() {
        // Pool of 4 where (3, 4) was never offered and still scores high.
        let pool = vec![1, 2, 3, 4];
        let ratings: HashMap<i64, Rating> = [
            (1, Rating { score: 1300.0, games: 8 }),
            (2, Rating { score: 1100.0, games: 8 }),
            (3, Rating { score: 1200.0, games: 2 }),
            (4, Rating { score: 1210.0, games: 2 }),
        ]
        .into_iter()
        .collect();
        let mut log = Vec::new();
        for _ in 0..4 {
            log.push(win(1, 2));
            log.push(win(1, 3));
            log.push(win(4, 2));
            log.push(win(3, 2));
        }
        let report = completion_report(&pool, &ratings, &log, 1);
        assert!(report.total_comparisons >= report.required_comparisons);
        assert!(report.mean_games >= 3.0);
        let best = report.best_remaining_score.expect("(3, 4) is uncompared");
        assert!(best > COMPLETION_MAX_PAIR_SCORE);
        assert!(!report.complete);
    }

    #[test]
    fn test_skips_count_toward_compared_set() {
        let (pool, ratings, mut log) = saturated_pool();
        // Replace the decided (1, 3) entries with a single skip: the pair
        // still counts as compared, and the floor is met by the rest.
        log.retain(|c| crate::types::pair_key(c.item_a, c.item_b) != (1, 3));
        log.push(Comparison { item_a: 1, item_b: 3, winner: None });
        for _ in 0..4 {
            log.push(win(1, 2));
        }
        let report = completion_report(&pool, &ratings, &log, 3);
        assert!(report.best_remaining_score.is_none());
        assert!(report.complete);
    }

    #[test]
    fn test_empty_pool_reports_zero_mean() {
        let report = completion_report(&[], &HashMap::new(), &[], 3);
        assert_eq!(report.mean_games, 0.0);
        assert!(report.best_remaining_score.is_none());
    }
}
