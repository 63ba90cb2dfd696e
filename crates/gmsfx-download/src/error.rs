//! Download error types

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Machine-checkable tag of a [`DownloadError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The sound name could not be turned into a usable URL
    InvalidUrl,
    /// The remote sound could not be opened
    FetchFailed,
    /// The local file could not be created
    DestinationUnavailable,
    /// Copying the body to disk broke off partway
    TransferFailed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidUrl => "InvalidUrl",
            ErrorKind::FetchFailed => "FetchFailed",
            ErrorKind::DestinationUnavailable => "DestinationUnavailable",
            ErrorKind::TransferFailed => "TransferFailed",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-level failure behind a [`DownloadError`]
#[derive(Error, Debug)]
pub enum ErrorCause {
    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Invalid URL: {message}")]
    InvalidUrl {
        message: String,
        #[source]
        cause: Option<ErrorCause>,
    },

    #[error("Fetch failed: {message}")]
    FetchFailed {
        message: String,
        #[source]
        cause: Option<ErrorCause>,
    },

    #[error("Destination unavailable: {message}")]
    DestinationUnavailable {
        message: String,
        #[source]
        cause: Option<ErrorCause>,
    },

    #[error("Transfer failed: {message}")]
    TransferFailed {
        message: String,
        #[source]
        cause: Option<ErrorCause>,
    },
}

impl DownloadError {
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::InvalidUrl => DownloadError::InvalidUrl {
                message,
                cause: None,
            },
            ErrorKind::FetchFailed => DownloadError::FetchFailed {
                message,
                cause: None,
            },
            ErrorKind::DestinationUnavailable => DownloadError::DestinationUnavailable {
                message,
                cause: None,
            },
            ErrorKind::TransferFailed => DownloadError::TransferFailed {
                message,
                cause: None,
            },
        }
    }

    /// Attach the underlying error
    pub fn with_cause(mut self, error: impl Into<ErrorCause>) -> Self {
        match &mut self {
            DownloadError::InvalidUrl { cause, .. }
            | DownloadError::FetchFailed { cause, .. }
            | DownloadError::DestinationUnavailable { cause, .. }
            | DownloadError::TransferFailed { cause, .. } => *cause = Some(error.into()),
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DownloadError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            DownloadError::FetchFailed { .. } => ErrorKind::FetchFailed,
            DownloadError::DestinationUnavailable { .. } => ErrorKind::DestinationUnavailable,
            DownloadError::TransferFailed { .. } => ErrorKind::TransferFailed,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DownloadError::InvalidUrl { message, .. }
            | DownloadError::FetchFailed { message, .. }
            | DownloadError::DestinationUnavailable { message, .. }
            | DownloadError::TransferFailed { message, .. } => message,
        }
    }

    pub fn cause(&self) -> Option<&ErrorCause> {
        match self {
            DownloadError::InvalidUrl { cause, .. }
            | DownloadError::FetchFailed { cause, .. }
            | DownloadError::DestinationUnavailable { cause, .. }
            | DownloadError::TransferFailed { cause, .. } => cause.as_ref(),
        }
    }
}

impl Serialize for DownloadError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("DownloadError", 3)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("cause", &self.cause().map(|c| c.to_string()))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_kind_and_message() {
        let error = DownloadError::new(ErrorKind::FetchFailed, "HTTP 404 Not Found");

        assert_eq!(error.kind(), ErrorKind::FetchFailed);
        assert_eq!(error.message(), "HTTP 404 Not Found");
        assert!(error.cause().is_none());
        assert_eq!(error.to_string(), "Fetch failed: HTTP 404 Not Found");
    }

    #[test]
    fn test_cause_is_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let error = DownloadError::new(ErrorKind::DestinationUnavailable, "/sounds/click.wav")
            .with_cause(io);

        assert_eq!(error.kind(), ErrorKind::DestinationUnavailable);
        assert!(matches!(error.cause(), Some(ErrorCause::Io(_))));
        assert_eq!(error.source().map(|s| s.to_string()).as_deref(), Some("read-only"));
    }

    #[test]
    fn test_serialize() {
        let error = DownloadError::new(ErrorKind::InvalidUrl, "bad name");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["kind"], "InvalidUrl");
        assert_eq!(json["message"], "bad name");
        assert!(json["cause"].is_null());
    }
}
