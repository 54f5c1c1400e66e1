// src/graph/rank/mod.rs
pub mod pagerank;
pub mod queries;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::network::LinkGraph;
use crate::error::{Result, WikinetError};

/// Parameters of a ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Number of propagation rounds. Default: 20
    pub iterations: usize,
    /// Share of an article's score passed along its links. Default: 0.9
    pub damping: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            iterations: 20,
            damping: DEFAULT_DAMPING,
        }
    }
}

pub const DEFAULT_DAMPING: f64 = 0.9;

impl RankConfig {
    /// Replaces the settings given on the command line, keeping the rest.
    #[must_use]
    pub fn with_overrides(self, iterations: Option<usize>, damping: Option<f64>) -> Self {
        Self {
            iterations: iterations.unwrap_or(self.iterations),
            damping: damping.unwrap_or(self.damping),
        }
    }

    /// Checks that damping is a probability.
    ///
    /// # Errors
    /// Returns [`WikinetError::InvalidSetting`] if damping is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if (0.0..=1.0).contains(&self.damping) {
            Ok(())
        } else {
            Err(WikinetError::InvalidSetting {
                field: "rank.damping",
                reason: format!("{} is not within [0, 1]", self.damping),
            })
        }
    }
}

impl LinkGraph {
    /// Ranks all articles, best first; ties are ordered by name.
    ///
    /// Scores are stored on the articles (see [`super::ArticleRef::rank`]).
    pub fn page_rank(&mut self, iterations: usize, damping: f64) -> Vec<String> {
        queries::names(self.ranked(iterations, damping))
    }

    /// Like [`LinkGraph::page_rank`], keeping each article's final score.
    pub fn ranked(&mut self, iterations: usize, damping: f64) -> Vec<(String, f64)> {
        debug!(articles = self.len(), iterations, damping, "ranking pass");
        let scores = pagerank::compute(self, iterations, damping);

        for (article, &score) in self.articles.iter_mut().zip(&scores) {
            article.rank = score;
        }

        let mut scored: Vec<(String, f64)> = self
            .articles
            .iter()
            .map(|a| (a.name.clone(), a.rank))
            .collect();
        queries::sort_by_score(&mut scored);
        scored
    }

    /// Runs a pass with the parameters in `config`.
    pub fn page_rank_with(&mut self, config: &RankConfig) -> Vec<String> {
        self.page_rank(config.iterations, config.damping)
    }
}
