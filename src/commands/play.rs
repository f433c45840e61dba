//! Play command handler

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use oscrec::cli::PlayArgs;
use oscrec::replay::PlayError;
use oscrec::Player;

/// Print every message of a recording to stdout.
///
/// Messages read before an import error are printed before the error is
/// returned.
pub fn handle(args: PlayArgs) -> Result<()> {
    ensure_regular_file(&args.input)?;
    let player = Player::new(args.port, args.input);

    let stdout = io::stdout();
    let summary = player.play(&mut stdout.lock())?;

    if let Some(error) = summary.import_error {
        return Err(error).with_context(|| {
            format!(
                "Playback of {} stopped after {} message(s)",
                player.input().display(),
                summary.played
            )
        });
    }
    Ok(())
}

/// The recording must exist and be a regular file before playback starts.
fn ensure_regular_file(path: &Path) -> Result<(), PlayError> {
    if !path.exists() {
        return Err(PlayError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(PlayError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
