//! Replay pipeline errors.

use std::path::PathBuf;

/// Why an import stopped before the end of the document.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Malformed attribute at byte {position}: {source}")]
    Attribute {
        position: u64,
        #[source]
        source: quick_xml::events::attributes::AttrError,
    },

    #[error("Document has no root element")]
    Empty,

    #[error("Unexpected element after the root element at byte {position}")]
    TrailingContent { position: u64 },

    #[error("Document ended with {open} unclosed element(s)")]
    Truncated { open: usize },
}

/// Errors that stop playback.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("Failed to write playback output: {0}")]
    Output(#[from] std::io::Error),
}
