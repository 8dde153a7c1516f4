/// Starting score for an item that has never been compared.
pub const DEFAULT_RATING: f64 = 1200.0;

/// K-factor once an item is established (at or past `K_RAMP_GAMES`).
pub const BASE_K: f64 = 32.0;

/// Decided comparisons after which the K-factor settles at `BASE_K`.
/// Below it, K ramps linearly up to `2 * BASE_K` at zero games, so fresh
/// items move fast and settle as evidence accumulates.
pub const K_RAMP_GAMES: u32 = 10;

/// Rating distance over which pair proximity decays to zero.
pub const PROXIMITY_RANGE: f64 = 400.0;

/// Rating gap beyond which the outcome is predictable enough to discount,
/// even when the log does not yet prove it.
pub const PREDICTABLE_GAP: f64 = 200.0;

/// Proximity multiplier applied past `PREDICTABLE_GAP`.
pub const PREDICTABLE_DISCOUNT: f64 = 0.3;

/// Mean games count at which per-pair uncertainty reaches zero.
pub const UNCERTAINTY_CEILING: f64 = 10.0;

/// Items below this many games still earn the information bonus.
pub const NOVICE_GAMES: u32 = 3;

/// Flat bonus fed into the blend when a pair touches a novice item.
pub const INFORMATION_BONUS: f64 = 0.2;

/// Blend weights for the pair score: proximity, uncertainty, bonus.
pub const PROXIMITY_WEIGHT: f64 = 0.5;
pub const UNCERTAINTY_WEIGHT: f64 = 0.3;
pub const BONUS_WEIGHT: f64 = 0.2;

/// Sentinel pair score: the outcome is already implied by recorded wins.
pub const IMPLIED_SENTINEL: f64 = -1.0;

/// Maximum win-chain length the implication search follows.
pub const DEFAULT_TRANSITIVE_DEPTH: usize = 3;

/// Size of the top-candidate window the general selector picks from at
/// random. Randomizing among near-ties avoids a repetitive comparison
/// order while still biasing toward the most informative pairs.
pub const GENERAL_PICK_WINDOW: usize = 5;

/// Top-candidate window for under-ranked-focus selection.
pub const FOCUS_PICK_WINDOW: usize = 3;

/// Default games threshold separating under-ranked items from established
/// ones in focus mode.
pub const FOCUS_THRESHOLD: u32 = 3;

/// Bonus for pairing an under-ranked item against an established partner.
pub const ESTABLISHED_PARTNER_BONUS: f64 = 0.5;

/// Anchor scoring: rating distance from the pool median over which anchor
/// proximity decays to zero.
pub const ANCHOR_PROXIMITY_RANGE: f64 = 300.0;

/// Games needed for full anchor stability credit.
pub const ANCHOR_STABLE_GAMES: f64 = 5.0;

/// Anchor blend weights: proximity to median, stability.
pub const ANCHOR_PROXIMITY_WEIGHT: f64 = 0.6;
pub const ANCHOR_STABILITY_WEIGHT: f64 = 0.4;

/// Top-candidate window for the anchor pick.
pub const ANCHOR_PICK_WINDOW: usize = 3;

/// Completion floor: a pool needs at least this many logged comparisons,
/// or `COMPLETION_PER_ITEM_FACTOR` per item, whichever is larger.
pub const COMPLETION_MIN_COMPARISONS: usize = 15;

/// Per-item multiplier for the completion comparison floor.
pub const COMPLETION_PER_ITEM_FACTOR: usize = 2;

/// Minimum mean decided comparisons per item for completion.
pub const COMPLETION_MEAN_GAMES: f64 = 3.0;

/// A pool is not complete while any uncompared pair scores above this.
pub const COMPLETION_MAX_PAIR_SCORE: f64 = 0.3;
