//! Configuration.
//!
//! - `Config` - settings loaded from a TOML file
//! - Store, leaderboard, and polling constants

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Backing store constants.
pub mod store {
    /// Collection holding one document per user.
    pub const USERS_COLLECTION: &str = "users";

    /// Default collection file for the file-backed store.
    pub const DEFAULT_STORE_FILE: &str = "users.json";
}

/// Leaderboard constants.
pub mod leaderboard {
    /// Number of ranks reported per tier.
    pub const PODIUM_SIZE: usize = 3;
}

/// Event loop polling configuration.
pub mod polling {
    /// Delay (in ms) between store refreshes while no event arrives.
    pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1000;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Collection file used by the file-backed store
    pub path: PathBuf,
    /// How often to re-read the store for writes made by other clients
    pub refresh_interval_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(store::DEFAULT_STORE_FILE),
            refresh_interval_ms: polling::DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

impl StoreConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

/// Local account signed in by `LocalAuthProvider`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub uid: Option<String>,
    pub display_name: Option<String>,
    /// Sign the account in at startup, like a remembered session
    pub remember: bool,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.store.refresh_interval_ms == 0 {
            return Err(Error::ConfigParseError(
                "store.refresh_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }
}
