/// Adaptive-K ELO update, applied once a comparison resolves to a winner.
///
/// Skips never reach this module.
use crate::constants::{BASE_K, K_RAMP_GAMES};
use crate::types::Rating;

/// K-factor for an item. `BASE_K` once established; below `K_RAMP_GAMES`
/// it ramps linearly up to `2 * BASE_K` at zero games, so new items carry
/// less sticky ratings.
pub fn k_factor(games: u32) -> f64 {
    if games >= K_RAMP_GAMES {
        BASE_K
    } else {
        BASE_K * (1.0 + f64::from(K_RAMP_GAMES - games) / f64::from(K_RAMP_GAMES))
    }
}

/// Expected win probability for `rating` against `opponent`, on the
/// standard 400-point logistic curve.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / 400.0))
}

/// Apply a decided comparison. Each side moves by its own K-factor,
/// scores land on whole points, and both games counts advance.
pub fn apply_outcome(winner: &mut Rating, loser: &mut Rating) {
    let expected_winner = expected_score(winner.score, loser.score);
    let expected_loser = expected_score(loser.score, winner.score);

    winner.score = (winner.score + k_factor(winner.games) * (1.0 - expected_winner)).round();
    loser.score = (loser.score + k_factor(loser.games) * (0.0 - expected_loser)).round();

    winner.games += 1;
    loser.games += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_k_factor_bounds() {
        assert_eq!(k_factor(0), 64.0);
        assert_eq!(k_factor(10), 32.0);
        assert_eq!(k_factor(25), 32.0);
    }

    #[test]
    fn test_k_factor_decreases_monotonically() {
        for games in 0..10 {
            assert!(k_factor(games) > k_factor(games + 1));
        }
    }

    #[test]
    fn test_expected_score_symmetry() {
        let e = expected_score(1200.0, 1200.0);
        assert!((e - 0.5).abs() < 1e-12);
        let a = expected_score(1200.0, 1300.0);
        let b = expected_score(1300.0, 1200.0);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_underdog_win_at_five_games() {
        // 1200 (5 games) beats 1300 (5 games): expected ≈ 0.3597, K = 48.
        let mut winner = Rating { score: 1200.0, games: 5 };
        let mut loser = Rating { score: 1300.0, games: 5 };
        apply_outcome(&mut winner, &mut loser);
        assert_eq!(winner.score, 1231.0);
        assert_eq!(loser.score, 1269.0);
        assert_eq!(winner.games, 6);
        assert_eq!(loser.games, 6);
    }

    #[test]
    fn test_winner_never_drops_loser_never_gains() {
        let cases = [
            (1200.0, 0, 1200.0, 0),
            (800.0, 3, 2100.0, 15),
            (2100.0, 15, 800.0, 3),
            (1500.0, 10, 1500.0, 10),
        ];
        for (ws, wg, ls, lg) in cases {
            let mut winner = Rating { score: ws, games: wg };
            let mut loser = Rating { score: ls, games: lg };
            apply_outcome(&mut winner, &mut loser);
            assert!(winner.score >= ws, "winner dropped from {ws} to {}", winner.score);
            assert!(loser.score <= ls, "loser rose from {ls} to {}", loser.score);
        }
    }

    #[test]
    fn test_scores_round_to_whole_points() {
        let mut winner = Rating { score: 1200.0, games: 5 };
        let mut loser = Rating { score: 1300.0, games: 5 };
        apply_outcome(&mut winner, &mut loser);
        assert_eq!(winner.score.fract(), 0.0);
        assert_eq!(loser.score.fract(), 0.0);
    }
}
