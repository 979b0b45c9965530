//! Core types: folders, raw messages and contact records

use std::fmt;
use std::path::PathBuf;

/// One message as handed over by a mail store, before field extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessage {
    /// Sender address (e.g., "jane@example.com")
    pub sender_email_address: String,

    /// Sender display name (e.g., "Jane Doe")
    pub sender_name: String,

    /// Subject line
    pub subject: String,

    /// Plain text body
    pub body: String,
}

impl RawMessage {
    pub fn new(
        sender_email_address: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender_email_address: sender_email_address.into(),
            sender_name: String::new(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Structured contact derived from a single message
///
/// Every field is always present; anything that could not be recovered is
/// left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContactRecord {
    pub sender_email_address: String,
    pub sender_first_name: String,
    pub sender_last_name: String,
    pub sender_street: String,
    pub sender_city: String,
    pub sender_state: String,
    pub sender_zip: String,
    pub sender_phone: String,
}

impl ContactRecord {
    /// Column names, in output order
    pub const FIELD_NAMES: [&'static str; 8] = [
        "senderEmailAddress",
        "senderFirstName",
        "senderLastName",
        "senderStreet",
        "senderCity",
        "senderState",
        "senderZip",
        "senderPhone",
    ];

    /// Field values in the same order as [`Self::FIELD_NAMES`]
    #[must_use]
    pub fn fields(&self) -> [&str; 8] {
        [
            &self.sender_email_address,
            &self.sender_first_name,
            &self.sender_last_name,
            &self.sender_street,
            &self.sender_city,
            &self.sender_state,
            &self.sender_zip,
            &self.sender_phone,
        ]
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} <{}>",
            self.sender_first_name, self.sender_last_name, self.sender_email_address
        )
    }
}

/// Where a folder's message comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageRef {
    /// Already decoded message
    Loaded(RawMessage),

    /// RFC 5322 file, parsed when iterated
    File(PathBuf),
}

impl From<RawMessage> for MessageRef {
    fn from(message: RawMessage) -> Self {
        Self::Loaded(message)
    }
}

/// A node of the mail store's folder tree
///
/// Display names of siblings need not be unique; lookups take the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderNode {
    pub display_name: String,
    pub children: Vec<Self>,
    pub messages: Vec<MessageRef>,
}

impl FolderNode {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            children: Vec::new(),
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<MessageRef>) -> Self {
        self.messages.push(message.into());
        self
    }

    #[must_use]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// First direct child whose display name equals `name` exactly
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.display_name == name)
    }
}
