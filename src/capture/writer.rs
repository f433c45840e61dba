//! XML document writer
//!
//! A recording is a flat list of `<message>` elements under a single root:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <oscp5messages>
//! <message channel="/muse/elements/blink" time="1520" value="1" />
//! </oscp5messages>
//! ```
//!
//! Every flush rewrites the complete document, so the file on disk is always
//! a closed, well-formed document holding the store as of that flush.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use quick_xml::escape::escape;

use super::error::CaptureError;
use crate::message::MessageRecord;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const ROOT_ELEMENT: &str = "oscp5messages";
pub const MESSAGE_ELEMENT: &str = "message";

/// Serialize `records` as a complete document.
pub fn write_document<'a, W, I>(writer: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a MessageRecord>,
{
    writeln!(writer, "{}", XML_DECLARATION)?;
    writeln!(writer, "<{}>", ROOT_ELEMENT)?;
    for record in records {
        writeln!(
            writer,
            r#"<{} channel="{}" time="{}" value="{}" />"#,
            MESSAGE_ELEMENT,
            escape(record.channel.as_str()),
            record.time_ms,
            record.value
        )?;
    }
    writeln!(writer, "</{}>", ROOT_ELEMENT)?;
    Ok(())
}

/// Overwrite `path` with a document holding `records`.
///
/// The file is truncated, written in full and synced before returning.
pub fn write_file<'a, I>(path: &Path, records: I) -> Result<(), CaptureError>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let to_error = |source: io::Error| CaptureError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    write_document(&mut out, records).map_err(to_error)?;
    let file = out.into_inner().map_err(|e| to_error(e.into_error()))?;
    file.sync_all().map_err(to_error)
}
