//! Recording player
//!
//! Imports a recording and writes one `channel : time : value` line per
//! message, in document order and without pacing: stored timestamps are
//! printed, not waited on.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::{ImportError, PlayError};
use super::importer::import_file;

/// Plays back one recording.
#[derive(Debug, Clone)]
pub struct Player {
    /// Kept for symmetry with `record`; playback does not use the network.
    port: u16,
    input: PathBuf,
}

/// What a playback run produced.
#[derive(Debug)]
pub struct PlaybackSummary {
    /// Lines written
    pub played: usize,
    /// Set when the recording could not be read to the end
    pub import_error: Option<ImportError>,
}

impl Player {
    /// Create a player for `input`.
    ///
    /// Callers check that `input` is an existing regular file first; a
    /// missing file here only shows up as an import error from [`Player::play`].
    pub fn new(port: u16, input: impl Into<PathBuf>) -> Self {
        Self {
            port,
            input: input.into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Import the recording and write every message to `out`.
    ///
    /// Messages read before an import failure are still written; the
    /// failure is returned in the summary.
    pub fn play<W: Write>(&self, out: &mut W) -> Result<PlaybackSummary, PlayError> {
        tracing::debug!(
            port = self.port,
            input = %self.input.display(),
            "Starting playback (port unused)"
        );

        let report = import_file(&self.input);
        for message in &report.messages {
            writeln!(out, "{}", message)?;
        }
        out.flush()?;

        Ok(PlaybackSummary {
            played: report.messages.len(),
            import_error: report.error,
        })
    }
}
