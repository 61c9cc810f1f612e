//! Error types for umlhex operations.
//!
//! Two layers exist. [`UmlHexError`] covers problems that stop the tool
//! before or outside the per-diagram loop, such as failing to build the HTTP
//! client. [`RenderError`] describes why a single diagram could not be
//! rendered; it is carried as data in [`Outcome::Failed`](crate::Outcome)
//! and never aborts the batch.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Boxed transport error, as returned by [`Fetch`](crate::fetch::Fetch) implementations.
pub type FetchError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for umlhex operations.
#[derive(Debug, Error)]
pub enum UmlHexError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),
}

/// Category of a per-diagram failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The request never produced a response (connection, timeout).
    Network,
    /// The server answered with a non-2xx status.
    Status,
    /// The output directory or file could not be written.
    Filesystem,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Status => "status",
            Self::Filesystem => "filesystem",
        };
        f.write_str(name)
    }
}

/// Why one diagram could not be rendered.
///
/// Every variant names the output file it was meant to produce.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("request for {filename} failed: {source}")]
    Network {
        filename: String,
        #[source]
        source: FetchError,
    },

    #[error("server returned HTTP {status} for {filename}")]
    Status { filename: String, status: u16 },

    #[error("could not write {}: {source}", .path.display())]
    Filesystem {
        filename: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenderError {
    /// Returns the failure category.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network { .. } => FailureKind::Network,
            Self::Status { .. } => FailureKind::Status,
            Self::Filesystem { .. } => FailureKind::Filesystem,
        }
    }

    /// Returns the output filename the failed render was targeting.
    pub fn filename(&self) -> &str {
        match self {
            Self::Network { filename, .. }
            | Self::Status { filename, .. }
            | Self::Filesystem { filename, .. } => filename,
        }
    }
}
