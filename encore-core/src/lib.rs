/// encore-core: Pure-computation pairwise ranking engine.
///
/// Orders a personal collection of attended shows by preference through a
/// sequence of forced binary comparisons: ELO-style ratings with adaptive
/// K-factors, information-weighted pair selection, transitive-implication
/// pruning over the win history, and a completion oracle that says when a
/// pool is ranked enough. No IO, no HTTP, no filesystem — just math.
/// Bring your own UI and persistence.
///
/// Items are identified by caller-provided `i64` IDs and compared only
/// within one pool; the caller keeps display metadata to itself.
///
/// # Quick start
///
/// ```rust
/// use encore_core::{RankingSession, SessionConfig};
///
/// let show_ids = vec![100, 200, 300]; // your IDs — any i64 values
///
/// let mut session = RankingSession::new(&show_ids, SessionConfig {
///     rng_seed: Some(7),
///     ..SessionConfig::default()
/// });
///
/// while let Some((a, b)) = session.next_pair() {
///     // Present the pair to the user; here the first show always wins.
///     session.record_outcome(a, b, a);
/// }
///
/// for (rank, (id, rating)) in session.standings().iter().enumerate() {
///     println!("{}. show {} at {} ({} comparisons)", rank + 1, id, rating.score, rating.games);
/// }
/// ```

pub mod anchor;
pub mod completion;
pub mod constants;
pub mod elo;
pub mod graph;
pub mod pairing;
pub mod scoring;
pub mod session;
pub mod types;

// Re-export primary public API at crate root.
pub use anchor::select_anchor;
pub use completion::{completion_report, is_complete, CompletionReport};
pub use elo::{apply_outcome, expected_score, k_factor};
pub use graph::{beats_within, build_beats_graph, transitively_decided, BeatsGraph};
pub use pairing::{largest_pool, select_focus_pair, select_general_pair, SelectionMode};
pub use scoring::score_pair;
pub use session::{RankingSession, SessionConfig};
pub use types::{
    compared_pairs, decided_pairs, pair_key, Comparison, Item, Pair, Rating, SkipPolicy,
};
