// src/graph/rank/queries.rs
use std::cmp::Ordering;

/// Sorts by descending score, ties broken by ascending name.
pub fn sort_by_score<S: AsRef<str>>(scored: &mut [(S, f64)]) {
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.as_ref().cmp(b.0.as_ref()))
    });
}

/// Drops the scores, keeping the order.
#[must_use]
pub fn names<S: Into<String>>(scored: Vec<(S, f64)>) -> Vec<String> {
    scored.into_iter().map(|(name, _)| name.into()).collect()
}
