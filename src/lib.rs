// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Contact Extraction
//!
//! Pulls contact records out of website lead emails kept in a mail store and
//! writes them as deduplicated CSV rows.
//!
//! # Features
//!
//! - Slash-delimited folder path resolution over the store's folder tree
//! - Name, street, city, state, zip and phone extraction from subject and body
//! - Sender address syntax filtering
//! - First-seen-wins deduplication by sender address
//!
//! # Example
//!
//! ```rust
//! use contact_extract::{FolderNode, RawMessage, is_valid_syntax, navigate, run};
//!
//! let root = FolderNode::new("Root").with_child(
//!     FolderNode::new("Inbox").with_message(RawMessage::new(
//!         "jane@example.com",
//!         "Website email from Jane Doe",
//!         "Hi\r\nJane Doe\r\n123 Main St\r\nSpringfield, IL 62701\r\n555-123-4567\r\n",
//!     )),
//! );
//!
//! let inbox = navigate(&root, "Inbox").unwrap();
//! let mut csv = Vec::new();
//! let written = run(inbox, &mut csv, is_valid_syntax).unwrap();
//!
//! assert_eq!(written, 1);
//! ```

mod dedup;
mod error;
mod extract;
mod navigate;
mod output;
mod pipeline;
mod store;
mod types;
mod validate;

pub use dedup::{DedupSink, dedup_key};
pub use error::{Error, Result};
pub use extract::extract;
pub use navigate::navigate;
pub use output::{CsvWriter, DELIMITER, encode_record};
pub use pipeline::{contacts, run};
pub use store::{DirStore, MemoryStore, MessageStore};
pub use types::*;
pub use validate::is_valid_syntax;
