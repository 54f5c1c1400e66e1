// src/graph/mod.rs
//! The article link network and the queries it answers.

pub mod article;
pub mod network;
pub mod rank;
pub mod reach;
pub mod similarity;
pub mod travel;

pub use article::{ArticleId, ArticleRef};
pub use network::LinkGraph;
pub use rank::{RankConfig, DEFAULT_DAMPING};
pub use travel::TravelPath;
