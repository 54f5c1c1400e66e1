//! Article link networks: construction, rank propagation, Jaccard similarity,
//! greedy travel paths and bounded-depth reachability.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod links;

pub use error::{Result, WikinetError};
pub use graph::{ArticleRef, LinkGraph, RankConfig, TravelPath};
