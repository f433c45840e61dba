//! Capture pipeline errors.

use std::path::PathBuf;

/// Errors that can occur while recording.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("At least one channel is required")]
    NoChannels,

    #[error("Flush interval must be at least 1")]
    ZeroInterval,

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Transport(#[from] crate::transport::TransportError),
}
