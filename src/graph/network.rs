// src/graph/network.rs
//! The link network: article arena, name index and edge construction.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use super::article::{Article, ArticleId, ArticleRef};
use crate::error::{Result, WikinetError};

/// A directed network of articles.
///
/// Articles live in an arena in first-seen order; edges are stored as
/// [`ArticleId`] lists on the source article.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    pub(crate) articles: Vec<Article>,
    index: HashMap<String, ArticleId>,
    edges: usize,
}

impl LinkGraph {
    /// Creates an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network from `(source, target)` pairs.
    #[must_use]
    pub fn from_links<I, S, T>(links: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut graph = Self::new();
        graph.update(links);
        graph
    }

    /// Adds the articles and links of `links` to the network.
    ///
    /// A pair whose edge already exists is a no-op; self-links are kept.
    pub fn update<I, S, T>(&mut self, links: I)
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let (articles_before, edges_before) = (self.articles.len(), self.edges);
        let mut pairs = 0usize;

        for (source, target) in links {
            let source = self.intern(source.as_ref());
            let target = self.intern(target.as_ref());
            self.connect(source, target);
            pairs += 1;
        }

        debug!(
            pairs,
            new_articles = self.articles.len() - articles_before,
            new_links = self.edges - edges_before,
            "updated link network"
        );
    }

    fn intern(&mut self, name: &str) -> ArticleId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = ArticleId(self.articles.len());
        self.articles.push(Article::new(name.to_string()));
        self.index.insert(name.to_string(), id);
        id
    }

    fn connect(&mut self, source: ArticleId, target: ArticleId) {
        if self.article(source).links_to(target) {
            return;
        }
        if let Some(article) = self.articles.get_mut(source.0) {
            article.neighbors.push(target);
        }
        if let Some(article) = self.articles.get_mut(target.0) {
            article.in_degree += 1;
        }
        self.edges += 1;
    }

    #[allow(clippy::indexing_slicing)] // Ids are only minted by `intern` for this arena.
    pub(crate) fn article(&self, id: ArticleId) -> &Article {
        &self.articles[id.0]
    }

    pub(crate) fn id_of(&self, name: &str) -> Option<ArticleId> {
        self.index.get(name).copied()
    }

    /// Names of all articles, in first-seen order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.articles.iter().map(|a| a.name.as_str()).collect()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up an article by name.
    ///
    /// # Errors
    /// Returns [`WikinetError::NotFound`] if no article has this name.
    pub fn get(&self, name: &str) -> Result<ArticleRef<'_>> {
        self.id_of(name)
            .map(|id| ArticleRef::new(self, id))
            .ok_or_else(|| WikinetError::not_found(name))
    }

    /// Iterates over all articles in first-seen order.
    pub fn articles(&self) -> impl Iterator<Item = ArticleRef<'_>> + '_ {
        (0..self.articles.len()).map(move |i| ArticleRef::new(self, ArticleId(i)))
    }

    /// Number of articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Number of distinct links accepted so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}

/// Renders as `{'A': ('A', ['B']), 'B': ('B', [])}` in first-seen order.
impl fmt::Display for LinkGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, article) in self.articles().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': {article}", article.name())?;
        }
        f.write_str("}")
    }
}
