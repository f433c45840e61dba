//! Capture pipeline
//!
//! Inbound OSC message → [`ChannelFilter`] → [`RecordStore`] → (every N
//! appends) → [`writer::write_file`].
//!
//! # Module Structure
//!
//! - [`store`] - append-only in-memory record sequence
//! - [`filter`] - exact-address channel matching
//! - [`writer`] - XML serialization of the whole store
//! - [`recorder`] - ties the above together and drives flushes

mod error;
pub mod filter;
pub mod recorder;
pub mod store;
pub mod writer;

pub use error::CaptureError;
pub use filter::ChannelFilter;
pub use recorder::{Recorder, RecorderOptions, Session, DEFAULT_FLUSH_INTERVAL};
pub use store::RecordStore;
