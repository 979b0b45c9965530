//! First-seen-wins deduplication in front of the output writer

use std::collections::HashSet;
use std::io::Write;

use crate::error::Result;
use crate::output::{CsvWriter, DELIMITER, encode_record};
use crate::types::ContactRecord;

/// Key of an encoded row: everything before the first delimiter, which is
/// the encoded sender address
#[must_use]
pub fn dedup_key(encoded: &str) -> &str {
    encoded
        .split_once(DELIMITER)
        .map_or(encoded, |(key, _)| key)
}

/// Forwards each record to the writer only the first time its key is seen
#[derive(Debug)]
pub struct DedupSink<W: Write> {
    seen: HashSet<String>,
    writer: CsvWriter<W>,
}

impl<W: Write> DedupSink<W> {
    pub fn new(writer: CsvWriter<W>) -> Self {
        Self {
            seen: HashSet::new(),
            writer,
        }
    }

    /// Returns `true` if the record was written, `false` if it was a repeat
    pub fn offer(&mut self, record: &ContactRecord) -> Result<bool> {
        let encoded = encode_record(record);
        if !self.seen.insert(dedup_key(&encoded).to_string()) {
            return Ok(false);
        }

        self.writer.write_encoded(&encoded)?;
        Ok(true)
    }

    /// Number of distinct keys forwarded so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn into_writer(self) -> CsvWriter<W> {
        self.writer
    }
}
