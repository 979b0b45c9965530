//! Comma-delimited output of contact records

use std::io::Write;

use crate::error::Result;
use crate::types::ContactRecord;

pub const DELIMITER: char = ',';

/// Encode one record as a CSV row, without the line terminator
#[must_use]
pub fn encode_record(record: &ContactRecord) -> String {
    encode_fields(record.fields())
}

fn encode_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    let mut row = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            row.push(DELIMITER);
        }
        push_field(&mut row, field);
    }
    row
}

fn push_field(row: &mut String, field: &str) {
    if field.contains([DELIMITER, '"', '\r', '\n']) {
        row.push('"');
        row.push_str(&field.replace('"', "\"\""));
        row.push('"');
    } else {
        row.push_str(field);
    }
}

/// Writes a header row and encoded records to an underlying writer
#[derive(Debug)]
pub struct CsvWriter<W: Write> {
    inner: W,
}

impl<W: Write> CsvWriter<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_header(&mut self) -> Result<()> {
        let header = encode_fields(ContactRecord::FIELD_NAMES);
        self.write_encoded(&header)
    }

    /// Write a row produced by [`encode_record`]
    pub fn write_encoded(&mut self, row: &str) -> Result<()> {
        self.inner.write_all(row.as_bytes())?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
