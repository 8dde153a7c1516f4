/// Beats graph: the directed win relation derived from the comparison log.
///
/// Rebuilt from the log on each selection cycle — no hidden module-level
/// cache. Cheap at personal-collection scale, O(log length) to build.
use std::collections::{HashMap, HashSet};

use crate::types::Comparison;

/// Winner -> set of items it has directly beaten.
pub type BeatsGraph = HashMap<i64, HashSet<i64>>;

/// Build the beats graph from the comparison log. Skips contribute
/// nothing: only a recorded winner creates an edge.
pub fn build_beats_graph(log: &[Comparison]) -> BeatsGraph {
    let mut graph: BeatsGraph = HashMap::new();
    for c in log {
        let Some(winner) = c.winner else { continue };
        let loser = if winner == c.item_a { c.item_b } else { c.item_a };
        graph.entry(winner).or_default().insert(loser);
    }
    graph
}

/// Whether a chain of at most `max_depth` recorded wins leads from `from`
/// to `to`. Breadth-first over "beats" edges, so a direct win is a chain
/// of one.
pub fn beats_within(graph: &BeatsGraph, from: i64, to: i64, max_depth: usize) -> bool {
    let mut visited: HashSet<i64> = HashSet::new();
    visited.insert(from);
    let mut frontier = vec![from];

    for _ in 0..max_depth {
        let mut next = Vec::new();
        for node in frontier {
            let Some(beaten) = graph.get(&node) else { continue };
            if beaten.contains(&to) {
                return true;
            }
            for &b in beaten {
                if visited.insert(b) {
                    next.push(b);
                }
            }
        }
        if next.is_empty() {
            return false;
        }
        frontier = next;
    }
    false
}

/// A pair is decided when either direction is implied by recorded wins.
/// Once the log lets you infer the outcome, asking the user again wastes
/// an interaction.
pub fn transitively_decided(graph: &BeatsGraph, a: i64, b: i64, max_depth: usize) -> bool {
    beats_within(graph, a, b, max_depth) || beats_within(graph, b, a, max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(winner: i64, loser: i64) -> Comparison {
        Comparison { item_a: winner, item_b: loser, winner: Some(winner) }
    }

    #[test]
    fn test_build_ignores_skips() {
        let log = vec![
            win(1, 2),
            Comparison { item_a: 2, item_b: 3, winner: None },
        ];
        let graph = build_beats_graph(&log);
        assert!(graph[&1].contains(&2));
        assert!(!graph.contains_key(&2));
    }

    #[test]
    fn test_winner_recorded_in_either_position() {
        let log = vec![Comparison { item_a: 5, item_b: 9, winner: Some(9) }];
        let graph = build_beats_graph(&log);
        assert!(graph[&9].contains(&5));
    }

    #[test]
    fn test_direct_win_is_depth_one() {
        let graph = build_beats_graph(&[win(1, 2)]);
        assert!(beats_within(&graph, 1, 2, 1));
        assert!(!beats_within(&graph, 2, 1, 3));
    }

    #[test]
    fn test_chain_respects_depth_bound() {
        // 1 beats 2 beats 3 beats 4: chain of 3 from 1 to 4.
        let graph = build_beats_graph(&[win(1, 2), win(2, 3), win(3, 4)]);
        assert!(beats_within(&graph, 1, 3, 2));
        assert!(!beats_within(&graph, 1, 3, 1));
        assert!(beats_within(&graph, 1, 4, 3));
        assert!(!beats_within(&graph, 1, 4, 2));
    }

    #[test]
    fn test_transitively_decided_both_directions() {
        let graph = build_beats_graph(&[win(1, 2), win(2, 3)]);
        assert!(transitively_decided(&graph, 1, 3, 2));
        assert!(transitively_decided(&graph, 3, 1, 2));
        assert!(!transitively_decided(&graph, 1, 3, 1));
    }

    #[test]
    fn test_cycle_terminates() {
        // 1 beats 2, 2 beats 1 — inconsistent history must not loop.
        let graph = build_beats_graph(&[win(1, 2), win(2, 1)]);
        assert!(beats_within(&graph, 1, 2, 5));
        assert!(!beats_within(&graph, 1, 99, 5));
    }
}
