//! Recording importer
//!
//! Streams a recording through `quick-xml` and collects every `<message>`
//! element in document order. The `channel`, `time` and `value` attributes
//! are taken as raw strings without any validation.
//!
//! Import never discards what it has already read: a structural error stops
//! the import, and the report carries both the messages read before the
//! failure and the error itself.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::error::ImportError;
use crate::capture::writer::MESSAGE_ELEMENT;
use crate::message::ImportedMessage;

/// Outcome of one import.
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Messages in document order, up to the point of failure
    pub messages: Vec<ImportedMessage>,
    /// Set when the document could not be read to the end
    pub error: Option<ImportError>,
}

impl ImportReport {
    fn failed(error: ImportError) -> Self {
        Self {
            messages: Vec::new(),
            error: Some(error),
        }
    }

    /// True when the whole document was read.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Discard partial results on failure.
    pub fn into_result(self) -> Result<Vec<ImportedMessage>, ImportError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.messages),
        }
    }
}

/// Import the recording at `path`.
pub fn import_file(path: &Path) -> ImportReport {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            let error = ImportError::Open {
                path: path.to_path_buf(),
                source,
            };
            tracing::error!(error = %error, "Import failed");
            return ImportReport::failed(error);
        }
    };

    let report = import_reader(BufReader::new(file));
    tracing::debug!(
        path = %path.display(),
        messages = report.messages.len(),
        complete = report.is_complete(),
        "Imported recording"
    );
    report
}

/// Import a recording from any buffered reader.
pub fn import_reader<R: BufRead>(source: R) -> ImportReport {
    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();
    let mut report = ImportReport::default();
    let mut open_elements = 0usize;
    let mut seen_root = false;
    let mut root_closed = false;

    let error = loop {
        let position = reader.buffer_position() as u64;
        let element = match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_) | Event::Empty(_)) if root_closed => {
                break Some(ImportError::TrailingContent { position });
            }
            Ok(Event::Start(e)) => {
                open_elements += 1;
                Some(e)
            }
            Ok(Event::Empty(e)) => {
                // An empty root element opens and closes at once
                root_closed = open_elements == 0;
                Some(e)
            }
            Ok(Event::End(_)) => {
                open_elements = open_elements.saturating_sub(1);
                root_closed = open_elements == 0;
                None
            }
            Ok(Event::Eof) => {
                break if !seen_root {
                    Some(ImportError::Empty)
                } else if open_elements > 0 {
                    Some(ImportError::Truncated {
                        open: open_elements,
                    })
                } else {
                    None
                };
            }
            Ok(_) => None,
            Err(source) => break Some(ImportError::Xml { position, source }),
        };

        if let Some(element) = element {
            seen_root = true;
            if element.name().as_ref() == MESSAGE_ELEMENT.as_bytes() {
                match read_message(&element, position) {
                    Ok(message) => report.messages.push(message),
                    Err(error) => break Some(error),
                }
            }
        }
        buf.clear();
    };

    if let Some(error) = &error {
        tracing::error!(
            error = %error,
            imported = report.messages.len(),
            "Import stopped early"
        );
    }
    report.error = error;
    report
}

fn read_message(element: &BytesStart<'_>, position: u64) -> Result<ImportedMessage, ImportError> {
    let mut message = ImportedMessage::default();
    for attr in element.attributes() {
        let attr = attr.map_err(|source| ImportError::Attribute { position, source })?;
        let slot = match attr.key.as_ref() {
            b"channel" => &mut message.channel,
            b"time" => &mut message.time,
            b"value" => &mut message.value,
            _ => continue,
        };
        let value = attr
            .unescape_value()
            .map_err(|source| ImportError::Xml { position, source })?;
        *slot = Some(value.into_owned());
    }
    Ok(message)
}
