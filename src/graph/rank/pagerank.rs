// src/graph/rank/pagerank.rs
//! Iterative rank propagation.
//!
//! Every round each article gives up its round-start score. An article with
//! links splits `damping * score` evenly over them (each share rounded to
//! three decimals) and then credits every article with `(1 - damping) / N`.
//! The leak is paid once per linking article, so it compounds within a round.
//! Articles without links are sinks: their score is dropped.

use tracing::trace;

use crate::graph::network::LinkGraph;

const INITIAL_SCORE: f64 = 1.0;
const CREDIT_DECIMALS: usize = 3;

/// Runs `iterations` rounds and returns the final score of every article,
/// indexed by article id.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(graph: &LinkGraph, iterations: usize, damping: f64) -> Vec<f64> {
    let mut scores = vec![INITIAL_SCORE; graph.len()];
    if graph.is_empty() {
        return scores;
    }

    let leak = (1.0 - damping) / graph.len() as f64;
    for round in 0..iterations {
        scores = iterate_once(graph, &scores, damping, leak);
        trace!(round, total = scores.iter().sum::<f64>(), "rank round");
    }

    scores
}

/// One round: reads the round-start snapshot `prev`, writes a fresh accumulator.
#[allow(clippy::cast_precision_loss, clippy::indexing_slicing)] // Ids index the same arena as `prev`.
fn iterate_once(graph: &LinkGraph, prev: &[f64], damping: f64, leak: f64) -> Vec<f64> {
    let mut next = prev.to_vec();

    for (source, article) in graph.articles.iter().enumerate() {
        let rank = prev[source];
        next[source] -= rank;

        if article.neighbors.is_empty() {
            continue;
        }

        let credit = round_to(damping * rank / article.neighbors.len() as f64, CREDIT_DECIMALS);
        for neighbor in &article.neighbors {
            next[neighbor.0] += credit;
        }
        for score in &mut next {
            *score += leak;
        }
    }

    next
}

/// Rounds the exact decimal value of `value` to `decimals` places.
///
/// Scaling by a power of ten first would round the already-inexact product,
/// which disagrees on inputs like `0.0135` (stored just below the midpoint).
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_zero_iterations_keeps_initial_scores() {
        let graph = LinkGraph::from_links([("A", "B"), ("B", "C")]);
        assert_eq!(compute(&graph, 0, 0.9), vec![1.0; 3]);
    }

    #[test]
    fn test_empty_graph() {
        assert!(compute(&LinkGraph::new(), 5, 0.9).is_empty());
    }

    #[test]
    fn test_single_round_by_hand() {
        // A -> B, B has no links. N = 2, leak = 0.05 per linking article.
        let graph = LinkGraph::from_links([("A", "B")]);
        let scores = compute(&graph, 1, 0.9);
        // A: 1 - 1 + 0.05 = 0.05
        // B: 1 + 0.9 + 0.05 - 1 = 0.95
        assert!(close(scores[0], 0.05));
        assert!(close(scores[1], 0.95));
    }

    #[test]
    fn test_leak_compounds_per_linking_article() {
        // Two linking articles in a 2-cycle: each pays the leak once.
        let graph = LinkGraph::from_links([("A", "B"), ("B", "A")]);
        let scores = compute(&graph, 1, 0.9);
        // Each: 1 - 1 + 0.9 + 2 * 0.05 = 1.0
        assert!(close(scores[0], 1.0));
        assert!(close(scores[1], 1.0));
    }

    #[test]
    fn test_sink_drops_score() {
        let graph = LinkGraph::from_links([("A", "B")]);
        let scores = compute(&graph, 2, 0.9);
        // Round 2: A gives round(0.9 * 0.05, 3) = 0.045 to B; B (0.95) is dropped.
        // A: 0.05 - 0.05 + 0.05 = 0.05
        // B: 0.95 + 0.045 + 0.05 - 0.95 = 0.095
        assert!(close(scores[0], 0.05));
        assert!(close(scores[1], 0.095));
    }

    #[test]
    fn test_round_to() {
        assert!(close(round_to(0.123_456, 3), 0.123));
        assert!(close(round_to(0.45, 3), 0.45));
        assert!(close(round_to(0.3, 3), 0.3));
        assert!(close(round_to(1.0 / 3.0, 3), 0.333));
    }

    #[test]
    fn test_round_to_uses_exact_decimal_value() {
        // Each of these is stored slightly below its written midpoint.
        assert_eq!(round_to(0.0135, 3), 0.013);
        assert_eq!(round_to(0.8775, 3), 0.877);
        assert_eq!(round_to(1.2645, 3), 1.264);
        // ...and this one slightly above.
        assert_eq!(round_to(0.0405, 3), 0.041);
    }
}
