// src/graph/article.rs
//! Articles (graph nodes) and borrowed views over them.

use std::fmt;

use super::network::LinkGraph;

/// Dense index of an article inside its owning [`LinkGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub(crate) usize);

/// One article: its name, the articles it links to, and derived state.
#[derive(Debug, Clone)]
pub(crate) struct Article {
    pub(crate) name: String,
    pub(crate) neighbors: Vec<ArticleId>,
    pub(crate) in_degree: usize,
    pub(crate) rank: f64,
}

impl Article {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            neighbors: Vec::new(),
            in_degree: 0,
            rank: 0.0,
        }
    }

    pub(crate) fn links_to(&self, target: ArticleId) -> bool {
        self.neighbors.contains(&target)
    }
}

/// Read-only handle to an article, resolved against its graph.
#[derive(Clone, Copy)]
pub struct ArticleRef<'g> {
    graph: &'g LinkGraph,
    id: ArticleId,
}

impl<'g> ArticleRef<'g> {
    pub(crate) fn new(graph: &'g LinkGraph, id: ArticleId) -> Self {
        Self { graph, id }
    }

    fn article(&self) -> &'g Article {
        self.graph.article(self.id)
    }

    #[must_use]
    pub fn id(&self) -> ArticleId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'g str {
        &self.article().name
    }

    /// Names of the linked articles, in insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = &'g str> + 'g {
        let graph = self.graph;
        self.article()
            .neighbors
            .iter()
            .map(move |&id| graph.article(id).name.as_str())
    }

    /// Number of outgoing links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.article().neighbors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.article().neighbors.is_empty()
    }

    /// Returns true if this article links to `name`.
    #[must_use]
    pub fn links_to(&self, name: &str) -> bool {
        self.graph
            .id_of(name)
            .is_some_and(|target| self.article().links_to(target))
    }

    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.article().in_degree
    }

    /// Score left by the most recent ranking pass, or `0.0` if none ran.
    #[must_use]
    pub fn rank(&self) -> f64 {
        self.article().rank
    }
}

impl fmt::Debug for ArticleRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleRef")
            .field("name", &self.name())
            .field("neighbors", &self.neighbors().collect::<Vec<_>>())
            .field("in_degree", &self.in_degree())
            .finish()
    }
}

/// Renders as `('A', ['B', 'C'])`.
impl fmt::Display for ArticleRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', [", self.name())?;
        for (i, name) in self.neighbors().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{name}'")?;
        }
        f.write_str("])")
    }
}
