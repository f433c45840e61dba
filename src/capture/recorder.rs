//! Message recorder
//!
//! Receives inbound OSC messages, keeps the ones addressed to a configured
//! channel and rewrites the output file after every `flush_interval`
//! appended records.
//!
//! The recorder is owned by a single consumer (see [`Session::run_until`]),
//! so the store and flush counter are never touched concurrently.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use rosc::OscMessage;
use tracing::{debug, error, info, warn};

use super::error::CaptureError;
use super::filter::ChannelFilter;
use super::store::RecordStore;
use super::writer;
use crate::message::MessageRecord;
use crate::transport::{self, OscListener};

/// Records between flushes when nothing else is configured.
pub const DEFAULT_FLUSH_INTERVAL: usize = 5;

/// How often the session loop checks for a stop request.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Settings for one recording session.
#[derive(Debug, Clone)]
pub struct RecorderOptions {
    /// File rewritten on every flush
    pub output: PathBuf,
    /// Exact addresses to capture
    pub channels: Vec<String>,
    /// Appended records between flushes (at least 1)
    pub flush_interval: usize,
}

impl RecorderOptions {
    pub fn new<I, S>(output: impl Into<PathBuf>, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            output: output.into(),
            channels: channels.into_iter().map(Into::into).collect(),
            flush_interval: DEFAULT_FLUSH_INTERVAL,
        }
    }

    pub fn with_flush_interval(mut self, flush_interval: usize) -> Self {
        self.flush_interval = flush_interval;
        self
    }
}

/// Capture state for one session.
#[derive(Debug)]
pub struct Recorder {
    output: PathBuf,
    filter: ChannelFilter,
    flush_interval: usize,
    /// Records appended since the last flush
    pending: usize,
    store: RecordStore,
    started: Instant,
}

impl Recorder {
    /// Create a recorder. The session clock starts now.
    pub fn new(options: RecorderOptions) -> Result<Self, CaptureError> {
        if options.channels.is_empty() {
            return Err(CaptureError::NoChannels);
        }
        if options.flush_interval == 0 {
            return Err(CaptureError::ZeroInterval);
        }

        Ok(Self {
            output: options.output,
            filter: ChannelFilter::new(options.channels),
            flush_interval: options.flush_interval,
            pending: 0,
            store: RecordStore::new(),
            started: Instant::now(),
        })
    }

    /// Bind `port` and start receiving for a new session.
    pub fn listen(options: RecorderOptions, port: u16) -> Result<Session, CaptureError> {
        let recorder = Recorder::new(options)?;
        let listener = OscListener::bind(port)?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| transport::TransportError::Bind { port, source })?;

        let (tx, inbound) = mpsc::channel();
        let receiver = listener.spawn(tx)?;

        info!(
            %local_addr,
            output = %recorder.output.display(),
            channels = ?recorder.filter.channels(),
            flush_interval = recorder.flush_interval,
            "Recording started"
        );

        Ok(Session {
            recorder,
            inbound,
            receiver: Some(receiver),
            local_addr,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn channels(&self) -> &[String] {
        self.filter.channels()
    }

    /// Milliseconds since the recorder was created.
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Handle one inbound message. Returns the number of records appended.
    pub fn on_message(&mut self, message: &OscMessage) -> usize {
        if self.filter.matching(&message.addr).next().is_none() {
            return 0;
        }

        let Some(value) = transport::first_int(&message.args) else {
            warn!(
                address = %message.addr,
                args = ?message.args,
                "Skipping message without an integer first argument"
            );
            return 0;
        };

        let time_ms = self.elapsed_ms();
        self.capture(&message.addr, value, time_ms)
    }

    /// Append one record per configured channel equal to `address`.
    ///
    /// Every append counts toward the flush interval; reaching it rewrites
    /// the output file. A failed flush is logged and recording goes on.
    pub fn capture(&mut self, address: &str, value: i64, time_ms: u64) -> usize {
        let matched: Vec<String> = self.filter.matching(address).map(str::to_owned).collect();

        for channel in &matched {
            debug!(channel = %channel, time_ms, value, "Captured");
            self.store
                .push(MessageRecord::new(channel.as_str(), time_ms, value));

            self.pending += 1;
            if self.pending >= self.flush_interval {
                self.pending = 0;
                if let Err(e) = self.write() {
                    error!(error = %e, "Flush failed, records kept in memory");
                }
            }
        }

        matched.len()
    }

    /// Records appended since the last flush.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Rewrite the output file with the whole store and reset the counter.
    pub fn flush(&mut self) -> Result<(), CaptureError> {
        self.pending = 0;
        self.write()
    }

    fn write(&self) -> Result<(), CaptureError> {
        writer::write_file(&self.output, &self.store)?;
        info!(
            records = self.store.len(),
            output = %self.output.display(),
            "Flushed"
        );
        Ok(())
    }
}

/// A recorder wired to a live OSC listener.
#[derive(Debug)]
pub struct Session {
    recorder: Recorder,
    inbound: Receiver<OscMessage>,
    /// Receiver thread feeding `inbound`; stopped when the session ends
    receiver: Option<transport::Receiver>,
    local_addr: SocketAddr,
}

impl Session {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// Process inbound messages until `stop` is set.
    ///
    /// On the way out the receiver thread is stopped and joined, then
    /// records appended since the last interval flush are written so
    /// nothing captured is lost. Returns the recorder for inspection.
    pub fn run_until(mut self, stop: &AtomicBool) -> Result<Recorder, CaptureError> {
        while !stop.load(Ordering::SeqCst) {
            match self.inbound.recv_timeout(STOP_POLL_INTERVAL) {
                Ok(message) => {
                    self.recorder.on_message(&message);
                }
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("OSC receiver stopped");
                    break;
                }
            }
        }

        if let Some(receiver) = self.receiver.take() {
            receiver.shutdown();
        }
        // Messages already received before the stop still count
        while let Ok(message) = self.inbound.try_recv() {
            self.recorder.on_message(&message);
        }

        if self.recorder.pending() > 0 {
            self.recorder.flush()?;
        }
        info!(records = self.recorder.store().len(), "Recording stopped");
        Ok(self.recorder)
    }
}
