//! Store configuration.
//!
//! # Environment Variables
//!
//! - `KATHSNAP_DATA_DIR` - where the file-backed storage keeps its entries
//!   (optional; defaults to the platform data directory, e.g.
//!   `~/.local/share/kathsnap` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "KATHSNAP_DATA_DIR";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither the override variable nor a platform data directory is
    /// available.
    #[error("no data directory available; set {DATA_DIR_ENV}")]
    NoDataDir,
}

/// Resolved store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory for the file-backed storage entries.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Load configuration from the environment.
    ///
    /// `KATHSNAP_DATA_DIR` wins when set and non-empty; otherwise the
    /// platform data directory is used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDataDir`] if no directory can be resolved.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return Ok(Self {
                data_dir: PathBuf::from(dir),
            });
        }

        let dirs = ProjectDirs::from("com", "KathSnap", "kathsnap").ok_or(ConfigError::NoDataDir)?;
        Ok(Self {
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    #[allow(unsafe_code)]
    fn test_env_override_wins() {
        // set_var is unsafe in edition 2024; confine it to this test
        unsafe {
            std::env::set_var(DATA_DIR_ENV, "/tmp/kathsnap-test-data");
        }
        let config = StoreConfig::from_env().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/kathsnap-test-data"));
        unsafe {
            std::env::remove_var(DATA_DIR_ENV);
        }
    }
}
