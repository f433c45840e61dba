//! Log output
//!
//! Logs always go to stderr; stdout is reserved for playback lines.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `OSCREC_LOG=debug`.
pub const LOG_ENV: &str = "OSCREC_LOG";

/// Install the global subscriber.
///
/// `OSCREC_LOG` wins over `default_level` (usually the configured level).
pub fn init(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
