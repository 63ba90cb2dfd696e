//! Sound fetching client

use std::path::{Path, PathBuf};

use gmsfx_cache::PathCache;
use gmsfx_download::{DownloadOptions, DownloadResult, SoundDownloader};

use crate::config::Config;
use crate::Result;

/// Main client instance
///
/// Owns the downloader and the cache of every sound it has written, so the
/// files can be listed and cleared later. Clones share the same cache.
#[derive(Debug, Clone)]
pub struct Gmsfx {
    config: Config,
    downloader: SoundDownloader,
}

impl Gmsfx {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_cache(config, PathCache::new())
    }

    /// Build a client that records downloads in an existing cache
    pub fn with_cache(config: Config, cache: PathCache) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let downloader = SoundDownloader::with_client(client, config.repository.clone(), cache)
            .with_options(DownloadOptions {
                download_dir: config.download_dir.clone(),
                strict_names: config.strict_names,
            });

        tracing::debug!(
            template = %config.repository.sound_url_template,
            download_dir = ?config.download_dir,
            "Initialized sound client"
        );

        Ok(Self { config, downloader })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn downloader(&self) -> &SoundDownloader {
        &self.downloader
    }

    /// Download URL of a sound
    pub fn sound_url(&self, name: &str) -> String {
        self.config.repository.sound_url(name)
    }

    /// Download a sound under its plain name into the default directory
    pub async fn get(&self, name: &str) -> DownloadResult {
        self.downloader.download(name).await
    }

    /// Download a sound into `save_dir` (or the default directory), optionally
    /// with a random numeric suffix
    pub async fn get_with(
        &self,
        name: &str,
        save_dir: Option<&Path>,
        randomize: bool,
    ) -> DownloadResult {
        self.downloader.download_with(name, save_dir, randomize).await
    }

    /// Base version reported by the remote collection, or `"undefined"`
    pub async fn base_version(&self) -> String {
        self.downloader.fetch_base_version().await
    }

    /// Base version baked into this build; may be stale
    pub fn static_base_version(&self) -> &'static str {
        gmsfx_download::static_base_version()
    }

    /// Paths of every sound downloaded and not yet cleared
    pub fn cached_sounds(&self) -> Vec<PathBuf> {
        self.downloader.cache().list()
    }

    /// Delete every cached sound file and empty the cache.
    ///
    /// Files that cannot be deleted are left behind silently. Returns how
    /// many were removed.
    pub fn clear_cached_sounds(&self) -> usize {
        self.downloader.cache().purge()
    }

    pub fn version(&self) -> &'static str {
        crate::VERSION
    }
}
