//! Record command handler

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use oscrec::capture::{Recorder, RecorderOptions};
use oscrec::cli::RecordArgs;
use oscrec::Config;

/// Capture messages until Ctrl+C, then write whatever is still pending.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: RecordArgs, config: &Config) -> Result<()> {
    let flush_interval = args
        .interval
        .map(|interval| interval as usize)
        .unwrap_or(config.record.flush_interval);

    let options =
        RecorderOptions::new(args.output, args.channels).with_flush_interval(flush_interval);
    let session = Recorder::listen(options, args.port).context("Failed to start recording")?;

    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);
    ctrlc::set_handler(move || stop_flag.store(true, Ordering::SeqCst))
        .context("Failed to install Ctrl+C handler")?;

    println!(
        "Recording {} on {} to {}. Press Ctrl+C to stop.",
        session.recorder().channels().join(", "),
        session.local_addr(),
        session.recorder().output().display()
    );

    let recorder = session.run_until(&stop)?;
    println!(
        "Captured {} message(s) to {}",
        recorder.store().len(),
        recorder.output().display()
    );
    Ok(())
}
