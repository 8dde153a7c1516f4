/// Anchor selection: the first comparison partner for a brand-new item.
///
/// A new item does not compete for the regular "next pair" slot. It gets
/// one introduction match against a well-established, middle-of-the-pack
/// item, so its first signal is diagnostic without being noisy.
use rand::Rng;
use std::collections::HashMap;

use crate::constants::{
    ANCHOR_PICK_WINDOW, ANCHOR_PROXIMITY_RANGE, ANCHOR_PROXIMITY_WEIGHT, ANCHOR_STABLE_GAMES,
    ANCHOR_STABILITY_WEIGHT, DEFAULT_RATING,
};
use crate::types::Rating;

fn median(mut scores: Vec<f64>) -> f64 {
    if scores.is_empty() {
        return DEFAULT_RATING;
    }
    scores.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = scores.len();
    if n % 2 == 1 {
        scores[n / 2]
    } else {
        0.5 * (scores[n / 2 - 1] + scores[n / 2])
    }
}

/// Pick the anchor for `new_item` from the existing members of its pool.
///
/// Every existing item scores `0.6 * proximity + 0.4 * stability`, where
/// proximity decays with distance from the median rating and stability
/// grows with decided comparisons. The winner comes uniformly at random
/// from the top `ANCHOR_PICK_WINDOW`. Returns `None` when the pool has no
/// other member yet. Items without a rating record count as fresh
/// defaults.
pub fn select_anchor(
    new_item: i64,
    pool: &[i64],
    ratings: &HashMap<i64, Rating>,
    rng: &mut impl Rng,
) -> Option<i64> {
    let existing: Vec<i64> = pool.iter().copied().filter(|&id| id != new_item).collect();
    if existing.is_empty() {
        return None;
    }

    let median_rating = median(
        existing
            .iter()
            .filter_map(|id| ratings.get(id).map(|r| r.score))
            .collect(),
    );

    let mut candidates: Vec<(i64, f64)> = existing
        .iter()
        .map(|&id| {
            let r = ratings.get(&id).copied().unwrap_or_default();
            let proximity = (1.0 - (r.score - median_rating).abs() / ANCHOR_PROXIMITY_RANGE).max(0.0);
            let stability = (f64::from(r.games) / ANCHOR_STABLE_GAMES).min(1.0);
            (id, ANCHOR_PROXIMITY_WEIGHT * proximity + ANCHOR_STABILITY_WEIGHT * stability)
        })
        .collect();

    candidates.sort_by(|x, y| y.1.partial_cmp(&x.1).unwrap_or(std::cmp::Ordering::Equal));
    let window = ANCHOR_PICK_WINDOW.min(candidates.len());
    Some(candidates[rng.random_range(0..window)].0)
}
