//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use gmsfx_download::{SoundRepository, NAME_PLACEHOLDER};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sound and base version URLs
    pub repository: SoundRepository,
    /// Default download directory; the system temp directory when unset
    pub download_dir: Option<PathBuf>,
    /// Timeout for a whole request, body included
    pub request_timeout_secs: Option<u64>,
    /// Reject sound names containing path separators, URL delimiters or
    /// control characters
    pub strict_names: bool,
}

impl Config {
    /// Read a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let placeholders = self.repository.placeholder_count();
        if placeholders != 1 {
            return Err(CoreError::Config(format!(
                "sound URL template must contain {NAME_PLACEHOLDER} exactly once, found {placeholders}"
            )));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(CoreError::Config(
                "request timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: SoundRepository::default(),
            download_dir: None,
            request_timeout_secs: None,
            strict_names: true,
        }
    }
}
