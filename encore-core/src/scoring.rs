/// Pair scoring: how much a comparison is worth asking for.
///
/// Higher is better. Exactly `-1.0` marks a pair whose outcome the log
/// already implies; those must never be offered.
use std::collections::HashMap;

use crate::constants::{
    BONUS_WEIGHT, IMPLIED_SENTINEL, INFORMATION_BONUS, NOVICE_GAMES, PREDICTABLE_DISCOUNT,
    PREDICTABLE_GAP, PROXIMITY_RANGE, PROXIMITY_WEIGHT, UNCERTAINTY_CEILING, UNCERTAINTY_WEIGHT,
};
use crate::graph::{transitively_decided, BeatsGraph};
use crate::types::Rating;

/// Score a candidate pair from current ratings and the beats graph.
///
/// Blend of three signals: rating proximity (close matchups are the least
/// predictable), rating uncertainty (items with few games have noisy
/// scores), and a flat bonus when either item is still a novice. Pairs
/// whose outcome is transitively implied return `IMPLIED_SENTINEL`; pairs
/// with a missing rating record return `0.0` — callers are expected to
/// create records before scoring.
pub fn score_pair(
    a: i64,
    b: i64,
    ratings: &HashMap<i64, Rating>,
    graph: &BeatsGraph,
    transitive_depth: usize,
) -> f64 {
    let (Some(ra), Some(rb)) = (ratings.get(&a), ratings.get(&b)) else {
        return 0.0;
    };

    if transitively_decided(graph, a, b, transitive_depth) {
        return IMPLIED_SENTINEL;
    }

    let diff = (ra.score - rb.score).abs();
    let mut proximity = (1.0 - diff / PROXIMITY_RANGE).max(0.0);
    if diff > PREDICTABLE_GAP {
        // Wide gaps have predictable outcomes even before the graph proves them.
        proximity *= PREDICTABLE_DISCOUNT;
    }

    let mean_games = f64::from(ra.games + rb.games) / 2.0;
    let uncertainty = ((UNCERTAINTY_CEILING - mean_games) / UNCERTAINTY_CEILING).max(0.0);

    let bonus = if ra.games.min(rb.games) < NOVICE_GAMES {
        INFORMATION_BONUS
    } else {
        0.0
    };

    PROXIMITY_WEIGHT * proximity + UNCERTAINTY_WEIGHT * uncertainty + BONUS_WEIGHT * bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_beats_graph;
    use crate::types::Comparison;

    fn ratings_of(entries: &[(i64, f64, u32)]) -> HashMap<i64, Rating> {
        entries
            .iter()
            .map(|&(id, score, games)| (id, Rating { score, games }))
            .collect()
    }

    #[test]
    fn test_fresh_equal_pair_scores_maximum() {
        let ratings = ratings_of(&[(1, 1200.0, 0), (2, 1200.0, 0)]);
        let graph = BeatsGraph::new();
        let score = score_pair(1, 2, &ratings, &graph, 3);
        // proximity 1.0, uncertainty 1.0, bonus 0.2
        let expected = 0.5 + 0.3 + 0.2 * 0.2;
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_proximity_decays_with_gap() {
        let graph = BeatsGraph::new();
        let near = score_pair(1, 2, &ratings_of(&[(1, 1200.0, 5), (2, 1250.0, 5)]), &graph, 3);
        let far = score_pair(1, 2, &ratings_of(&[(1, 1200.0, 5), (2, 1390.0, 5)]), &graph, 3);
        assert!(near > far);
    }

    #[test]
    fn test_wide_gap_discounted() {
        let graph = BeatsGraph::new();
        // Gap of 201 triggers the discount; gap of 199 does not.
        let just_over = score_pair(1, 2, &ratings_of(&[(1, 1200.0, 10), (2, 1401.0, 10)]), &graph, 3);
        let just_under = score_pair(1, 2, &ratings_of(&[(1, 1200.0, 10), (2, 1399.0, 10)]), &graph, 3);
        let over_proximity = (1.0 - 201.0 / 400.0) * 0.3;
        assert!((just_over - 0.5 * over_proximity).abs() < 1e-12);
        assert!(just_under > just_over * 3.0);
    }

    #[test]
    fn test_implied_pair_gets_sentinel() {
        let ratings = ratings_of(&[(1, 1200.0, 1), (2, 1200.0, 2), (3, 1200.0, 1)]);
        let graph = build_beats_graph(&[
            Comparison { item_a: 1, item_b: 2, winner: Some(1) },
            Comparison { item_a: 2, item_b: 3, winner: Some(2) },
        ]);
        assert_eq!(score_pair(1, 3, &ratings, &graph, 2), IMPLIED_SENTINEL);
        assert_eq!(score_pair(3, 1, &ratings, &graph, 2), IMPLIED_SENTINEL);
        // Depth 1 cannot see the two-step chain.
        assert!(score_pair(1, 3, &ratings, &graph, 1) > 0.0);
    }

    #[test]
    fn test_missing_rating_scores_zero() {
        let ratings = ratings_of(&[(1, 1200.0, 0)]);
        let graph = BeatsGraph::new();
        assert_eq!(score_pair(1, 99, &ratings, &graph, 3), 0.0);
    }

    #[test]
    fn test_uncertainty_fades_with_games() {
        let graph = BeatsGraph::new();
        let young = score_pair(1, 2, &ratings_of(&[(1, 1200.0, 3), (2, 1200.0, 3)]), &graph, 3);
        let old = score_pair(1, 2, &ratings_of(&[(1, 1200.0, 12), (2, 1200.0, 12)]), &graph, 3);
        assert!(young > old);
        // Past the ceiling, uncertainty bottoms out at zero rather than going negative.
        assert!((old - 0.5).abs() < 1e-12);
    }
}
