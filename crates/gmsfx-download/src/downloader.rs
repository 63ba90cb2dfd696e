//! Sound downloader

use futures_util::StreamExt;
use rand::Rng;
use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};
use tokio::io::AsyncWriteExt;
use url::Url;

use gmsfx_cache::PathCache;

use crate::error::{DownloadError, ErrorKind};
use crate::repository::SoundRepository;
use crate::result::DownloadResult;
use crate::version;
use crate::Result;

/// Per-downloader settings applied to every call
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Directory used when a download names none; `None` means the system
    /// temp directory
    pub download_dir: Option<PathBuf>,
    /// Reject names that would escape the destination directory or alter the URL
    pub strict_names: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            download_dir: None,
            strict_names: true,
        }
    }
}

/// Fetches sounds from a [`SoundRepository`] and records every file it
/// writes in a [`PathCache`].
///
/// Each call makes a single attempt. Two calls writing the same destination
/// path race on the file; the last writer wins.
#[derive(Debug, Clone)]
pub struct SoundDownloader {
    client: reqwest::Client,
    repository: SoundRepository,
    cache: PathCache,
    options: DownloadOptions,
}

impl SoundDownloader {
    pub fn new(repository: SoundRepository, cache: PathCache) -> Self {
        Self::with_client(reqwest::Client::new(), repository, cache)
    }

    pub fn with_client(client: reqwest::Client, repository: SoundRepository, cache: PathCache) -> Self {
        Self {
            client,
            repository,
            cache,
            options: DownloadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DownloadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn repository(&self) -> &SoundRepository {
        &self.repository
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    pub fn options(&self) -> &DownloadOptions {
        &self.options
    }

    /// Download a sound into the default directory under its plain name
    pub async fn download(&self, name: &str) -> DownloadResult {
        self.download_with(name, None, false).await
    }

    /// Download a sound.
    ///
    /// `destination_dir` overrides the configured directory. With `randomize`
    /// the file is saved as `{name}_{0..=255}.wav` instead of `{name}.wav`.
    pub async fn download_with(
        &self,
        name: &str,
        destination_dir: Option<&Path>,
        randomize: bool,
    ) -> DownloadResult {
        match self.try_download(name, destination_dir, randomize).await {
            Ok(path) => DownloadResult::success(path),
            Err(e) => {
                tracing::warn!(name = %name, kind = %e.kind(), error = %e, "Sound download failed");
                DownloadResult::failure(e)
            }
        }
    }

    /// Remote base version of the sound collection, or `"undefined"`
    pub async fn fetch_base_version(&self) -> String {
        version::fetch_base_version(&self.client, self.repository.base_version_url()).await
    }

    async fn try_download(
        &self,
        name: &str,
        destination_dir: Option<&Path>,
        randomize: bool,
    ) -> Result<PathBuf> {
        if self.options.strict_names {
            validate_name(name)?;
        }

        let url = Url::parse(&self.repository.sound_url(name)).map_err(|e| {
            DownloadError::new(
                ErrorKind::InvalidUrl,
                format!("Cannot build a URL for sound '{}'", name.escape_debug()),
            )
            .with_cause(e)
        })?;

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            DownloadError::new(ErrorKind::FetchFailed, format!("Cannot open {url}")).with_cause(e)
        })?;

        if !response.status().is_success() {
            return Err(DownloadError::new(
                ErrorKind::FetchFailed,
                format!("HTTP {} for {url}", response.status()),
            ));
        }

        let base_dir = match destination_dir.or(self.options.download_dir.as_deref()) {
            Some(dir) => dir.to_path_buf(),
            None => std::env::temp_dir(),
        };
        let path = destination_path(&base_dir, name, randomize);

        let mut file = tokio::fs::File::create(&path).await.map_err(|e| {
            DownloadError::new(
                ErrorKind::DestinationUnavailable,
                format!("Cannot create {}", path.display()),
            )
            .with_cause(e)
        })?;

        let written = match copy_body(response, &mut file).await {
            Ok(written) => written,
            Err(e) => {
                drop(file);
                if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                    tracing::debug!(path = %path.display(), error = %remove_err, "Could not remove partial sound");
                }
                return Err(e);
            }
        };

        self.cache.add(path.clone());

        tracing::info!(
            name = %name,
            path = %path.display(),
            bytes = written,
            "Downloaded sound"
        );

        Ok(path)
    }
}

async fn copy_body(response: reqwest::Response, file: &mut tokio::fs::File) -> Result<u64> {
    let mut stream = response.bytes_stream();
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| {
            DownloadError::new(
                ErrorKind::TransferFailed,
                format!("Connection broke off after {written} bytes"),
            )
            .with_cause(e)
        })?;

        file.write_all(&chunk).await.map_err(|e| {
            DownloadError::new(
                ErrorKind::TransferFailed,
                format!("Write failed after {written} bytes"),
            )
            .with_cause(e)
        })?;

        written = written.saturating_add(chunk.len() as u64);
    }

    file.flush().await.map_err(|e| {
        DownloadError::new(ErrorKind::TransferFailed, "Flush failed").with_cause(e)
    })?;

    Ok(written)
}

/// `{base}{sep}{name}.wav`, with the separator only added when `base` does
/// not already end in one
fn destination_path(base: &Path, name: &str, randomize: bool) -> PathBuf {
    let file_name = if randomize {
        let suffix: u8 = rand::thread_rng().gen_range(0..=255);
        format!("{name}_{suffix}.wav")
    } else {
        format!("{name}.wav")
    };

    let mut path = OsString::from(base.as_os_str());
    if !base.as_os_str().to_string_lossy().ends_with(MAIN_SEPARATOR) {
        path.push(MAIN_SEPARATOR_STR);
    }
    path.push(file_name);

    PathBuf::from(path)
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name is a relative directory")
    } else if name.contains(['/', '\\']) {
        Some("name contains a path separator")
    } else if name.contains(['?', '#']) {
        Some("name contains URL delimiters")
    } else if name.chars().any(char::is_control) {
        Some("name contains control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DownloadError::new(
            ErrorKind::InvalidUrl,
            format!("Invalid sound name '{}': {reason}", name.escape_debug()),
        )),
        None => Ok(()),
    }
}
