// src/graph/travel.rs
//! Greedy travel paths.
//!
//! From the current article, step to the linked article with the highest
//! in-degree (ties: smallest name). Nothing is marked visited, so a cycle
//! reachable under this rule makes the path infinite. Bound it with `take`.

use std::cmp::Reverse;
use std::iter::FusedIterator;

use super::article::ArticleId;
use super::network::LinkGraph;

/// Lazy sequence of article names produced by [`LinkGraph::travel`].
#[derive(Debug, Clone)]
pub struct TravelPath<'g> {
    graph: &'g LinkGraph,
    next: Option<ArticleId>,
}

impl<'g> Iterator for TravelPath<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.graph.best_neighbor(current);
        Some(self.graph.article(current).name.as_str())
    }
}

impl FusedIterator for TravelPath<'_> {}

impl LinkGraph {
    /// Walks from `start`, always following the most-linked-to neighbor.
    ///
    /// Yields nothing if `start` is unknown. May never end; see module docs.
    #[must_use]
    pub fn travel(&self, start: &str) -> TravelPath<'_> {
        TravelPath {
            graph: self,
            next: self.id_of(start),
        }
    }

    fn best_neighbor(&self, id: ArticleId) -> Option<ArticleId> {
        self.article(id).neighbors.iter().copied().min_by_key(|&n| {
            let article = self.article(n);
            (Reverse(article.in_degree), article.name.as_str())
        })
    }
}
