//! Download outcome

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

use crate::error::DownloadError;

/// Outcome of a sound download: either the path written or the error that
/// stopped it, never both.
#[derive(Debug)]
pub struct DownloadResult {
    outcome: Result<PathBuf, DownloadError>,
}

impl DownloadResult {
    pub fn success(path: PathBuf) -> Self {
        Self { outcome: Ok(path) }
    }

    pub fn failure(error: DownloadError) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Path of the downloaded sound, if the download succeeded
    pub fn path(&self) -> Option<&Path> {
        self.outcome.as_ref().ok().map(PathBuf::as_path)
    }

    pub fn error(&self) -> Option<&DownloadError> {
        self.outcome.as_ref().err()
    }

    pub fn into_result(self) -> Result<PathBuf, DownloadError> {
        self.outcome
    }
}

impl From<Result<PathBuf, DownloadError>> for DownloadResult {
    fn from(outcome: Result<PathBuf, DownloadError>) -> Self {
        Self { outcome }
    }
}

impl Serialize for DownloadResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("DownloadResult", 2)?;
        state.serialize_field("path", &self.path())?;
        state.serialize_field("error", &self.error())?;
        state.end()
    }
}
