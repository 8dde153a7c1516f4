use std::collections::HashSet;

use crate::constants::DEFAULT_RATING;

/// A pairing: two item IDs to be compared.
pub type Pair = (i64, i64);

/// An item as the engine sees it: opaque ID plus the pool it belongs to.
/// Items are only ever compared within one pool; display metadata stays
/// with the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: i64,
    pub pool: String,
}

/// Per-item strength record, lazily created with defaults the first time
/// an item participates in ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rating {
    /// ELO-style strength estimate. Unbounded; lands on whole points after
    /// each update.
    pub score: f64,
    /// Decided comparisons this item has been part of. Never decremented.
    pub games: u32,
}

impl Default for Rating {
    fn default() -> Self {
        Rating {
            score: DEFAULT_RATING,
            games: 0,
        }
    }
}

/// One logged comparison. Append-only: entries are never mutated or
/// removed once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub item_a: i64,
    pub item_b: i64,
    /// ID of the winning item — one of `item_a` / `item_b` — or `None`
    /// for a skip. Skips never move ratings or the beats graph.
    pub winner: Option<i64>,
}

/// What a logged skip means for future selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipPolicy {
    /// A skipped pair is never offered again (every log entry blocks its
    /// pair).
    Block,
    /// Only decided comparisons block their pair; skipped pairs stay
    /// eligible on later selection cycles.
    Reoffer,
}

/// Normalize an unordered pair so `(a, b)` and `(b, a)` collide.
pub fn pair_key(a: i64, b: i64) -> Pair {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Unordered pairs of every logged comparison, decided or skipped.
pub fn compared_pairs(log: &[Comparison]) -> HashSet<Pair> {
    log.iter().map(|c| pair_key(c.item_a, c.item_b)).collect()
}

/// Unordered pairs of decided comparisons only.
pub fn decided_pairs(log: &[Comparison]) -> HashSet<Pair> {
    log.iter()
        .filter(|c| c.winner.is_some())
        .map(|c| pair_key(c.item_a, c.item_b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rating() {
        let r = Rating::default();
        assert_eq!(r.score, 1200.0);
        assert_eq!(r.games, 0);
    }

    #[test]
    fn test_pair_key_is_order_insensitive() {
        assert_eq!(pair_key(3, 7), pair_key(7, 3));
        assert_eq!(pair_key(3, 7), (3, 7));
    }

    #[test]
    fn test_compared_pairs_includes_skips() {
        let log = vec![
            Comparison { item_a: 1, item_b: 2, winner: Some(1) },
            Comparison { item_a: 3, item_b: 2, winner: None },
        ];
        let compared = compared_pairs(&log);
        assert!(compared.contains(&(1, 2)));
        assert!(compared.contains(&(2, 3)));

        let decided = decided_pairs(&log);
        assert!(decided.contains(&(1, 2)));
        assert!(!decided.contains(&(2, 3)));
    }
}
