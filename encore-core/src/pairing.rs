/// Pair selection: which comparison to ask for next.
///
/// Two modes. General mode scores every eligible pair in the pool and
/// picks at random among the top few. Under-ranked-focus mode pins the
/// item with the fewest decided comparisons and finds it a partner.
/// Callers pass the RNG in, so tests can pin seeds.
use rand::Rng;
use std::collections::{HashMap, HashSet};

use crate::constants::{
    ESTABLISHED_PARTNER_BONUS, FOCUS_PICK_WINDOW, GENERAL_PICK_WINDOW,
};
use crate::graph::BeatsGraph;
use crate::scoring::score_pair;
use crate::types::{pair_key, Item, Pair, Rating};

/// Which selection flow runs on each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionMode {
    /// Score every eligible pair in the pool.
    General,
    /// Restrict to items below the games threshold; when none qualify the
    /// pool counts as sufficiently ranked.
    UnderRankedFocus,
}

/// A scored candidate pair.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    pair: Pair,
    score: f64,
}

/// Sort candidates by score descending and pick uniformly at random from
/// the top `window`.
fn pick_among_top(mut candidates: Vec<Candidate>, window: usize, rng: &mut impl Rng) -> Option<Pair> {
    if candidates.is_empty() {
        return None;
    }
    candidates.sort_by(|x, y| y.score.partial_cmp(&x.score).unwrap_or(std::cmp::Ordering::Equal));
    let window = window.min(candidates.len());
    Some(candidates[rng.random_range(0..window)].pair)
}

fn games_of(ratings: &HashMap<i64, Rating>, id: i64) -> u32 {
    ratings.get(&id).map_or(0, |r| r.games)
}

/// General mode: enumerate every unordered pair in the pool not yet in
/// `excluded`, score it, and pick among the top `GENERAL_PICK_WINDOW`.
/// Returns `None` when fewer than two items remain or every pair is
/// already compared or implied — "nothing worth asking right now".
pub fn select_general_pair(
    pool: &[i64],
    ratings: &HashMap<i64, Rating>,
    graph: &BeatsGraph,
    excluded: &HashSet<Pair>,
    transitive_depth: usize,
    rng: &mut impl Rng,
) -> Option<Pair> {
    if pool.len() < 2 {
        return None;
    }

    let mut candidates = Vec::new();
    for (i, &a) in pool.iter().enumerate() {
        for &b in &pool[i + 1..] {
            let key = pair_key(a, b);
            if excluded.contains(&key) {
                continue;
            }
            let score = score_pair(a, b, ratings, graph, transitive_depth);
            if score < 0.0 {
                continue;
            }
            candidates.push(Candidate { pair: key, score });
        }
    }

    pick_among_top(candidates, GENERAL_PICK_WINDOW, rng)
}

/// Under-ranked-focus mode: the primary is the item with the fewest
/// decided comparisons among those below `threshold` (ties keep pool
/// order). Partners score as usual, plus a bonus when the partner is
/// already established — a novice-versus-veteran comparison calibrates
/// the novice fastest. Returns `None` when no item is under-ranked or no
/// eligible partner remains.
pub fn select_focus_pair(
    pool: &[i64],
    ratings: &HashMap<i64, Rating>,
    graph: &BeatsGraph,
    excluded: &HashSet<Pair>,
    threshold: u32,
    transitive_depth: usize,
    rng: &mut impl Rng,
) -> Option<Pair> {
    if pool.len() < 2 {
        return None;
    }

    let primary = pool
        .iter()
        .copied()
        .filter(|&id| games_of(ratings, id) < threshold)
        .min_by_key(|&id| games_of(ratings, id))?;

    let mut candidates = Vec::new();
    for &partner in pool {
        if partner == primary {
            continue;
        }
        let key = pair_key(primary, partner);
        if excluded.contains(&key) {
            continue;
        }
        let mut score = score_pair(primary, partner, ratings, graph, transitive_depth);
        if score < 0.0 {
            continue;
        }
        if games_of(ratings, partner) >= threshold {
            score += ESTABLISHED_PARTNER_BONUS;
        }
        candidates.push(Candidate { pair: key, score });
    }

    pick_among_top(candidates, FOCUS_PICK_WINDOW, rng)
}

/// Default pool policy for multi-pool item sets: the pool key with the
/// most members. Ties keep first-appearance order. Selection itself always
/// runs on a single pool; hosts that want a different policy pass their
/// own choice.
pub fn largest_pool(items: &[Item]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(key, _)| *key == item.pool) {
            Some((_, n)) => *n += 1,
            None => counts.push((&item.pool, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (key, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }
    best.map(|(key, _)| key)
}
