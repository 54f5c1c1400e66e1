// tests/unit_rank.rs
//! Tests for rank propagation.

use wikinet_core::graph::DEFAULT_DAMPING;
use wikinet_core::{LinkGraph, RankConfig};

#[test]
fn test_zero_iterations_is_alphabetical() {
    let mut graph = LinkGraph::from_links([("Zeta", "Alpha"), ("Mu", "Zeta")]);
    assert_eq!(graph.page_rank(0, DEFAULT_DAMPING), vec!["Alpha", "Mu", "Zeta"]);
    for article in graph.articles() {
        assert!((article.rank() - 1.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_ranks_every_article_once() {
    let mut graph = LinkGraph::from_links([("A", "B"), ("B", "C"), ("C", "A"), ("D", "A")]);
    let mut ranked = graph.page_rank(10, DEFAULT_DAMPING);
    ranked.sort();
    assert_eq!(ranked, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_scores_are_stored_on_articles() {
    let mut graph = LinkGraph::from_links([("A", "B")]);
    let ranked = graph.ranked(1, DEFAULT_DAMPING);

    assert_eq!(ranked.first().map(|(n, _)| n.as_str()), Some("B"));
    let b = graph.get("B").unwrap();
    assert!((b.rank() - 0.95).abs() < 1e-9);
    let a = graph.get("A").unwrap();
    assert!((a.rank() - 0.05).abs() < 1e-9);
}

#[test]
fn test_leak_paid_by_every_linking_article() {
    // In a 3-cycle each article gets 0.9 from its predecessor and three leaks of 0.1 / 3.
    let mut graph = LinkGraph::from_links([("C", "A"), ("A", "B"), ("B", "C")]);
    for (name, score) in graph.ranked(1, DEFAULT_DAMPING) {
        assert!((score - 1.0).abs() < 1e-9, "{name} scored {score}");
    }
}

#[test]
fn test_sinks_lose_score() {
    // D links nowhere, so its score vanishes each round.
    let mut graph = LinkGraph::from_links([("A", "D"), ("B", "D"), ("C", "D")]);
    let ranked = graph.ranked(2, DEFAULT_DAMPING);
    assert_eq!(ranked.first().map(|(n, _)| n.as_str()), Some("D"));
    let total: f64 = ranked.iter().map(|(_, s)| s).sum();
    assert!(total < 4.0);
}

#[test]
fn test_config_drives_pass() {
    let mut graph = LinkGraph::from_links([("A", "B"), ("C", "B")]);
    let config = RankConfig {
        iterations: 1,
        damping: DEFAULT_DAMPING,
    };
    assert_eq!(graph.page_rank_with(&config).first().map(String::as_str), Some("B"));
}

fn assert_scores(ranked: &[(String, f64)], expected: &[(&str, f64)]) {
    let names: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
    let want: Vec<&str> = expected.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, want);
    for ((name, score), (_, want)) in ranked.iter().zip(expected) {
        assert!((score - want).abs() < 1e-9, "{name} scored {score}, expected {want}");
    }
}

#[test]
fn test_credit_rounding_decides_order() {
    // In round 2, C and B each pass on 0.9 * 0.975 = 0.8775, which is stored
    // just below the midpoint and must round to 0.877.
    let mut graph = LinkGraph::from_links([("C", "A"), ("D", "C"), ("B", "B")]);
    assert_scores(
        &graph.ranked(2, DEFAULT_DAMPING),
        &[("A", 0.953), ("B", 0.952), ("C", 0.142), ("D", 0.075)],
    );

    let mut graph = LinkGraph::from_links([("C", "A"), ("D", "C"), ("B", "B")]);
    assert_scores(
        &graph.ranked(3, DEFAULT_DAMPING),
        &[("B", 0.932), ("A", 0.203), ("C", 0.142), ("D", 0.075)],
    );
}

#[test]
fn test_third_decimal_credit_rounds_down() {
    // B has no in-links and holds 0.06 (three leaks of 0.02) after each round.
    // Splitting 0.9 * 0.06 over four links gives 0.0135, stored below the midpoint.
    let mut graph = LinkGraph::from_links([
        ("C", "C"),
        ("B", "C"),
        ("B", "A"),
        ("B", "D"),
        ("E", "C"),
        ("B", "E"),
    ]);
    assert_scores(
        &graph.ranked(3, DEFAULT_DAMPING),
        &[("C", 2.127), ("A", 0.073), ("D", 0.073), ("E", 0.073), ("B", 0.06)],
    );
}

#[test]
fn test_four_cycle_with_chord() {
    let mut graph =
        LinkGraph::from_links([("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("A", "C")]);
    assert_scores(
        &graph.ranked(4, DEFAULT_DAMPING),
        &[("C", 1.209), ("D", 1.04), ("A", 1.036), ("B", 0.714)],
    );
}
