//! GMSFX Sound Downloader
//!
//! - Sound URLs built from a fixed repository template
//! - Single-attempt download to a local directory
//! - Successful downloads registered in a [`PathCache`]
//! - Best-effort remote base version lookup

mod downloader;
mod error;
mod repository;
mod result;
mod version;

pub use downloader::{DownloadOptions, SoundDownloader};
pub use error::{DownloadError, ErrorCause, ErrorKind};
pub use gmsfx_cache::PathCache;
pub use repository::{
    sound_url, SoundRepository, BASE_VERSION_URL, NAME_PLACEHOLDER, SOUND_URL_TEMPLATE,
};
pub use result::DownloadResult;
pub use version::{fetch_base_version, static_base_version, BASE_VERSION_STATIC, UNDEFINED};

pub type Result<T> = std::result::Result<T, DownloadError>;
