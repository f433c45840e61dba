//! Append-only record storage.

use crate::message::MessageRecord;

/// Ordered, append-only sequence of captured records.
///
/// Records stay in arrival order. Nothing is ever removed, reordered or
/// deduplicated; the store lives as long as the recording session.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<MessageRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MessageRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
