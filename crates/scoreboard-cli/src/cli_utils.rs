//! Common CLI utility functions shared across commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scoreboard_core::{Config, FileStore};
use tracing::{info, warn};

/// Load the config file, falling back to defaults if it cannot be read.
///
/// `store_override` replaces the configured store path.
pub fn load_config(path: &Path, store_override: Option<PathBuf>) -> Config {
    let mut config = if path.exists() {
        match Config::load(path) {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(store) = store_override {
        config.store.path = store;
    }
    config
}

/// Open the file-backed score store named in the config.
pub fn open_store(config: &Config) -> Result<FileStore> {
    FileStore::open(&config.store.path)
        .with_context(|| format!("Failed to open score store {:?}", config.store.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = load_config(Path::new("does-not-exist.toml"), None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_store_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scoreboard.toml");
        fs::write(&path, "[store]\npath = \"from-config.json\"\n").unwrap();

        let config = load_config(&path, None);
        assert_eq!(config.store.path, PathBuf::from("from-config.json"));

        let config = load_config(&path, Some(PathBuf::from("override.json")));
        assert_eq!(config.store.path, PathBuf::from("override.json"));
    }

    #[test]
    fn test_invalid_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scoreboard.toml");
        fs::write(&path, "[store\n").unwrap();

        assert_eq!(load_config(&path, None), Config::default());
    }
}
