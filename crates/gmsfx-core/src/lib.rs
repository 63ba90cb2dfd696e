//! GMSFX Core
//!
//! One entry point owning configuration, the HTTP client and the cache of
//! downloaded sounds.

mod client;
mod config;
mod error;

pub use client::Gmsfx;
pub use config::Config;
pub use error::CoreError;

// Re-export components
pub use gmsfx_cache::PathCache;
pub use gmsfx_download::{
    sound_url, DownloadError, DownloadOptions, DownloadResult, ErrorCause, ErrorKind,
    SoundDownloader, SoundRepository, BASE_VERSION_STATIC, UNDEFINED,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Library version
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
