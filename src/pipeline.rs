//! Extraction run: enumerate, extract, validate, deduplicate, write

use std::io::Write;

use tracing::{debug, info};

use crate::dedup::DedupSink;
use crate::error::Result;
use crate::extract::extract;
use crate::output::CsvWriter;
use crate::types::{ContactRecord, FolderNode};

/// Contacts with a valid sender address, lazily, in store order
///
/// Only messages directly inside `folder` are visited.
pub fn contacts<'a, F>(
    folder: &'a FolderNode,
    is_valid: F,
) -> impl Iterator<Item = Result<ContactRecord>> + 'a
where
    F: Fn(&str) -> bool + 'a,
{
    folder
        .messages()
        .map(|message| message.map(|m| extract(&m)))
        .filter(move |record| match record {
            Ok(r) => is_valid(&r.sender_email_address),
            Err(_) => true,
        })
}

/// Write the deduplicated contacts of `folder` to `output` as CSV
///
/// The header row is always written. Returns the number of data rows. The
/// first error from the store or the writer ends the run.
pub fn run<W, F>(folder: &FolderNode, output: W, is_valid: F) -> Result<usize>
where
    W: Write,
    F: Fn(&str) -> bool,
{
    info!("Extracting contacts from folder {}", folder.display_name);

    let mut writer = CsvWriter::new(output);
    writer.write_header()?;

    let mut sink = DedupSink::new(writer);
    for record in contacts(folder, is_valid) {
        let record = record?;
        if sink.offer(&record)? {
            debug!("Wrote contact {record}");
        }
    }

    let written = sink.len();
    sink.into_writer().finish()?;

    info!("Wrote {written} contacts");
    Ok(written)
}
