//! Captured and imported message records.

use std::fmt;

/// A message captured on one configured channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    /// Exact address the message arrived on
    pub channel: String,
    /// Milliseconds since the recording session started
    pub time_ms: u64,
    /// Integer taken from the first OSC argument
    pub value: i64,
}

impl MessageRecord {
    pub fn new(channel: impl Into<String>, time_ms: u64, value: i64) -> Self {
        Self {
            channel: channel.into(),
            time_ms,
            value,
        }
    }
}

/// A `<message>` element read back from a recording.
///
/// Attribute values are kept as the raw strings found in the document.
/// Nothing is checked: a missing attribute is `None` and `time` or `value`
/// may hold anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedMessage {
    pub channel: Option<String>,
    pub time: Option<String>,
    pub value: Option<String>,
}

impl ImportedMessage {
    pub fn new(
        channel: impl Into<String>,
        time: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            channel: Some(channel.into()),
            time: Some(time.into()),
            value: Some(value.into()),
        }
    }
}

impl From<&MessageRecord> for ImportedMessage {
    fn from(record: &MessageRecord) -> Self {
        Self::new(
            record.channel.as_str(),
            record.time_ms.to_string(),
            record.value.to_string(),
        )
    }
}

/// Playback line format: `channel : time : value`.
impl fmt::Display for ImportedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {} : {}",
            self.channel.as_deref().unwrap_or(""),
            self.time.as_deref().unwrap_or(""),
            self.value.as_deref().unwrap_or("")
        )
    }
}
