//! oscrec - capture OSC messages to XML and play them back
//!
//! Two pipelines:
//!
//! - **capture**: an OSC-over-UDP [`transport`] feeds a [`capture::Recorder`],
//!   which keeps the messages addressed to the configured channels in a
//!   [`capture::RecordStore`] and periodically rewrites the whole store to
//!   an XML document.
//! - **replay**: [`replay::import_file`] streams such a document back into
//!   ordered [`ImportedMessage`]s and [`replay::Player`] prints them.

pub mod capture;
pub mod cli;
pub mod config;
pub mod logging;
pub mod message;
pub mod replay;
pub mod transport;

pub use capture::{Recorder, RecordStore};
pub use config::Config;
pub use message::{ImportedMessage, MessageRecord};
pub use replay::{import_file, ImportReport, Player};
