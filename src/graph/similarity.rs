// src/graph/similarity.rs
//! Jaccard similarity of outgoing-link sets.

use std::collections::HashSet;

use super::article::ArticleId;
use super::network::LinkGraph;
use super::rank::queries;

impl LinkGraph {
    /// Orders every article by how closely its links match those of `name`.
    ///
    /// Returns `None` if `name` is unknown or links nowhere.
    #[must_use]
    pub fn jaccard(&self, name: &str) -> Option<Vec<String>> {
        self.jaccard_scores(name).map(queries::names)
    }

    /// Jaccard index of every article against `name`, best first; ties by name.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn jaccard_scores(&self, name: &str) -> Option<Vec<(String, f64)>> {
        let reference = self.id_of(name)?;
        let reference_set = self.neighbor_set(reference);
        if reference_set.is_empty() {
            return None;
        }

        let mut scored: Vec<(String, f64)> = self
            .articles
            .iter()
            .map(|article| {
                let other: HashSet<ArticleId> = article.neighbors.iter().copied().collect();
                let shared = reference_set.intersection(&other).count();
                let union = reference_set.union(&other).count();
                (article.name.clone(), shared as f64 / union as f64)
            })
            .collect();

        queries::sort_by_score(&mut scored);
        Some(scored)
    }

    pub(crate) fn neighbor_set(&self, id: ArticleId) -> HashSet<ArticleId> {
        self.article(id).neighbors.iter().copied().collect()
    }
}
