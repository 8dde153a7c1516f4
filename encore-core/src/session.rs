/// Ranking session orchestrator.
///
/// Owns one pool's state for the select → present → decide → update
/// cycle: the ratings map, the append-only comparison log, and a seeded
/// RNG for candidate tie-breaks. The caller presents pairs and reports
/// back decisions; persistence of ratings and log entries stays with the
/// caller.
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

use crate::anchor::select_anchor;
use crate::completion::{completion_report, CompletionReport};
use crate::constants::{DEFAULT_TRANSITIVE_DEPTH, FOCUS_THRESHOLD};
use crate::elo::apply_outcome;
use crate::graph::build_beats_graph;
use crate::pairing::{select_focus_pair, select_general_pair, SelectionMode};
use crate::types::{compared_pairs, decided_pairs, Comparison, Pair, Rating, SkipPolicy};

/// Session knobs. `Default` matches the engine's standard behavior;
/// tests pin `rng_seed` for deterministic picks.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub mode: SelectionMode,
    pub skip_policy: SkipPolicy,
    /// Games threshold for under-ranked-focus mode.
    pub focus_threshold: u32,
    /// Maximum win-chain length treated as "already answered".
    pub transitive_depth: usize,
    /// RNG seed for the randomized top-candidate picks. `None` seeds from
    /// the thread RNG.
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            mode: SelectionMode::General,
            skip_policy: SkipPolicy::Block,
            focus_threshold: FOCUS_THRESHOLD,
            transitive_depth: DEFAULT_TRANSITIVE_DEPTH,
            rng_seed: None,
        }
    }
}

pub struct RankingSession {
    pool: Vec<i64>,
    ratings: HashMap<i64, Rating>,
    log: Vec<Comparison>,
    config: SessionConfig,
    rng: SmallRng,
}

impl RankingSession {
    /// Start a fresh session over one pool of items. Every item gets a
    /// default rating record up front.
    pub fn new(pool: &[i64], config: SessionConfig) -> Self {
        Self::with_history(pool, HashMap::new(), Vec::new(), config)
    }

    /// Resume a session from persisted ratings and comparison history.
    /// Items without a persisted record get the lazy default.
    pub fn with_history(
        pool: &[i64],
        mut ratings: HashMap<i64, Rating>,
        log: Vec<Comparison>,
        config: SessionConfig,
    ) -> Self {
        let mut seen = HashSet::with_capacity(pool.len());
        for &id in pool {
            assert!(seen.insert(id), "Duplicate item ID: {}", id);
            ratings.entry(id).or_default();
        }

        let rng = match config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };

        RankingSession {
            pool: pool.to_vec(),
            ratings,
            log,
            config,
            rng,
        }
    }

    /// Number of items in the pool.
    pub fn num_items(&self) -> usize {
        self.pool.len()
    }

    /// Pairs the selector must not offer again under the configured skip
    /// policy.
    fn excluded_pairs(&self) -> HashSet<Pair> {
        match self.config.skip_policy {
            SkipPolicy::Block => compared_pairs(&self.log),
            SkipPolicy::Reoffer => decided_pairs(&self.log),
        }
    }

    /// Select the next pair to present, or `None` when nothing is worth
    /// asking under the configured mode. The beats graph is rebuilt from
    /// the log on every call; the session holds no derived caches.
    pub fn next_pair(&mut self) -> Option<Pair> {
        let graph = build_beats_graph(&self.log);
        let excluded = self.excluded_pairs();
        match self.config.mode {
            SelectionMode::General => select_general_pair(
                &self.pool,
                &self.ratings,
                &graph,
                &excluded,
                self.config.transitive_depth,
                &mut self.rng,
            ),
            SelectionMode::UnderRankedFocus => select_focus_pair(
                &self.pool,
                &self.ratings,
                &graph,
                &excluded,
                self.config.focus_threshold,
                self.config.transitive_depth,
                &mut self.rng,
            ),
        }
    }

    /// Record a decided comparison: ratings move immediately and the log
    /// gains an entry. Panics on IDs outside the pool or a winner that is
    /// neither side, mirroring the well-formed-input contract.
    pub fn record_outcome(&mut self, item_a: i64, item_b: i64, winner: i64) {
        assert!(
            winner == item_a || winner == item_b,
            "Winner {} is neither {} nor {}",
            winner,
            item_a,
            item_b,
        );
        let loser = if winner == item_a { item_b } else { item_a };

        let mut winner_rating = self.rating_of(winner);
        let mut loser_rating = self.rating_of(loser);
        apply_outcome(&mut winner_rating, &mut loser_rating);
        self.ratings.insert(winner, winner_rating);
        self.ratings.insert(loser, loser_rating);

        self.log.push(Comparison {
            item_a,
            item_b,
            winner: Some(winner),
        });
    }

    /// Record a skip. No rating moves; whether the pair can come back
    /// depends on the configured skip policy.
    pub fn record_skip(&mut self, item_a: i64, item_b: i64) {
        let _ = self.rating_of(item_a);
        let _ = self.rating_of(item_b);
        self.log.push(Comparison {
            item_a,
            item_b,
            winner: None,
        });
    }

    /// Introduce a new item mid-session and return its anchor partner —
    /// the single introduction comparison to present. `None` when the
    /// pool had no other member.
    pub fn add_item(&mut self, id: i64) -> Option<i64> {
        assert!(
            !self.pool.contains(&id),
            "Duplicate item ID: {}",
            id,
        );
        self.pool.push(id);
        self.ratings.entry(id).or_default();
        select_anchor(id, &self.pool, &self.ratings, &mut self.rng)
    }

    /// Completion oracle over the session's pool.
    pub fn completion(&self) -> CompletionReport {
        completion_report(
            &self.pool,
            &self.ratings,
            &self.log,
            self.config.transitive_depth,
        )
    }

    pub fn is_complete(&self) -> bool {
        self.completion().complete
    }

    /// Current rating record for an item, panicking on unknown IDs.
    fn rating_of(&self, id: i64) -> Rating {
        *self
            .ratings
            .get(&id)
            .unwrap_or_else(|| panic!("Unknown item ID: {}", id))
    }

    pub fn rating(&self, id: i64) -> Option<Rating> {
        self.ratings.get(&id).copied()
    }

    pub fn ratings(&self) -> &HashMap<i64, Rating> {
        &self.ratings
    }

    pub fn log(&self) -> &[Comparison] {
        &self.log
    }

    /// Logged comparisons so far, skips included.
    pub fn comparison_count(&self) -> usize {
        self.log.len()
    }

    /// Current standings, strongest first. Equal scores keep pool order.
    pub fn standings(&self) -> Vec<(i64, Rating)> {
        let mut out: Vec<(i64, Rating)> = self
            .pool
            .iter()
            .map(|&id| (id, self.ratings[&id]))
            .collect();
        out.sort_by(|x, y| y.1.score.partial_cmp(&x.1.score).unwrap_or(std::cmp::Ordering::Equal));
        out
    }
}
