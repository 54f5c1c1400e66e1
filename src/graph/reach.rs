// src/graph/reach.rs
//! Bounded-depth reachability ("friends by depth").

use std::collections::HashSet;

use tracing::trace;

use super::article::ArticleId;
use super::network::LinkGraph;

impl LinkGraph {
    /// Names of all articles reachable from `start` in at most `depth` links,
    /// `start` included. Unordered.
    ///
    /// Returns `None` if `start` is unknown.
    #[must_use]
    pub fn friends_by_depth(&self, start: &str, depth: usize) -> Option<HashSet<String>> {
        let start = self.id_of(start)?;
        let reached = self.expand(start, depth);
        Some(
            reached
                .into_iter()
                .map(|id| self.article(id).name.clone())
                .collect(),
        )
    }

    fn expand(&self, start: ArticleId, depth: usize) -> HashSet<ArticleId> {
        let mut reached = HashSet::from([start]);

        for round in 0..depth {
            let frontier: HashSet<ArticleId> = reached
                .iter()
                .flat_map(|&id| self.article(id).neighbors.iter().copied())
                .collect();
            let before = reached.len();
            reached.extend(frontier);
            trace!(round, reached = reached.len(), "expanded friends");

            // Fixed point: further rounds add nothing.
            if reached.len() == before {
                break;
            }
        }

        reached
    }
}
