use serde::{Deserialize, Serialize};

use crate::graph::RankConfig;

/// Contents of `wikinet.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub travel: TravelConfig,
    #[serde(default)]
    pub friends: FriendsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelConfig {
    /// Most articles a travel path prints. Paths can be infinite.
    #[serde(default = "default_travel_limit")]
    pub limit: usize,
}

impl Default for TravelConfig {
    fn default() -> Self {
        Self { limit: default_travel_limit() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendsConfig {
    #[serde(default = "default_friends_depth")]
    pub depth: usize,
}

impl Default for FriendsConfig {
    fn default() -> Self {
        Self { depth: default_friends_depth() }
    }
}

const fn default_travel_limit() -> usize { 50 }
const fn default_friends_depth() -> usize { 2 }
