// src/config/mod.rs
pub mod types;

pub use self::types::{Config, FriendsConfig, TravelConfig};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, WikinetError};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "wikinet.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, or `wikinet.toml` when `path` is `None`.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(CONFIG_FILE), false),
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(WikinetError::Io {
                    source,
                    path: path.to_path_buf(),
                })
            }
        };

        let config = Self::parse_toml(&content, path)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parses and validates TOML content; `origin` is used in errors.
    ///
    /// # Errors
    /// Returns error on invalid TOML or out-of-range settings.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|source| WikinetError::Config {
            source,
            path: origin.to_path_buf(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if a setting is out of range.
    pub fn validate(&self) -> Result<()> {
        self.rank.validate()?;
        self.travel.validate()
    }
}

impl TravelConfig {
    /// # Errors
    /// Returns error if `limit` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(WikinetError::InvalidSetting {
                field: "travel.limit",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
