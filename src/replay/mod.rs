//! Replay pipeline
//!
//! Recording file → [`importer`] → ordered [`ImportedMessage`](crate::ImportedMessage)s
//! → [`Player`].

mod error;
pub mod importer;
pub mod player;

pub use error::{ImportError, PlayError};
pub use importer::{import_file, import_reader, ImportReport};
pub use player::{PlaybackSummary, Player};
