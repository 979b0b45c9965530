//! Mail store adapters
//!
//! A store owns the folder tree; the rest of the crate only reads it through
//! [`MessageStore::root_folder`].

use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

use mailparse::{MailAddr, MailHeaderMap, ParsedMail};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{FolderNode, MessageRef, RawMessage};

const MESSAGE_EXTENSION: &str = "eml";

/// Read access to a hierarchical mail store
pub trait MessageStore {
    fn root_folder(&self) -> &FolderNode;

    /// Display names of the root folder's direct children
    fn top_level_names(&self) -> Vec<&str> {
        self.root_folder()
            .children
            .iter()
            .map(|f| f.display_name.as_str())
            .collect()
    }
}

/// Store over a folder tree built in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    root: FolderNode,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(root: FolderNode) -> Self {
        Self { root }
    }
}

impl MessageStore for MemoryStore {
    fn root_folder(&self) -> &FolderNode {
        &self.root
    }
}

/// Store over a directory tree of `.eml` files
///
/// Every directory is a folder named after the directory, every `.eml` file
/// in it is a message. Entries are ordered by file name.
#[derive(Debug, Clone)]
pub struct DirStore {
    path: PathBuf,
    root: FolderNode,
}

impl DirStore {
    /// Open the store rooted at `path`, resolved to an absolute path first
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = fs::canonicalize(path).map_err(|e| Error::store(path, e))?;
        let root = scan_folder(&path)?;

        debug!(
            "Opened mail store {} with {} top-level folders",
            path.display(),
            root.children.len()
        );

        Ok(Self { path, root })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageStore for DirStore {
    fn root_folder(&self) -> &FolderNode {
        &self.root
    }
}

fn scan_folder(dir: &Path) -> Result<FolderNode> {
    let display_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut entries: Vec<(PathBuf, FileType)> = fs::read_dir(dir)
        .map_err(|e| Error::store(dir, e))?
        .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))))
        .collect::<std::io::Result<_>>()
        .map_err(|e| Error::store(dir, e))?;
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut folder = FolderNode::new(display_name);
    for (entry, file_type) in entries {
        if file_type.is_dir() {
            folder.children.push(scan_folder(&entry)?);
        } else if file_type.is_symlink() && entry.is_dir() {
            // Not followed: a link may point back up the tree
            debug!("Skipping linked folder {}", entry.display());
        } else if entry
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MESSAGE_EXTENSION))
        {
            folder.messages.push(MessageRef::File(entry));
        }
    }

    Ok(folder)
}

impl MessageRef {
    fn load(&self) -> Result<Option<RawMessage>> {
        match self {
            Self::Loaded(message) => Ok(Some(message.clone())),
            Self::File(path) => read_message_file(path),
        }
    }
}

impl FolderNode {
    /// Contained messages in store order, not descending into subfolders
    ///
    /// Files the store cannot parse are skipped; read failures are yielded as
    /// errors.
    pub fn messages(&self) -> impl Iterator<Item = Result<RawMessage>> + '_ {
        self.messages
            .iter()
            .filter_map(|message| message.load().transpose())
    }
}

/// Load one message file; `None` if its content is not a parseable message
fn read_message_file(path: &Path) -> Result<Option<RawMessage>> {
    let raw = fs::read(path).map_err(|e| Error::store(path, e))?;

    match mailparse::parse_mail(&raw) {
        Ok(parsed) => Ok(Some(raw_message(&parsed))),
        Err(e) => {
            warn!("Skipping unparseable message {}: {e}", path.display());
            Ok(None)
        }
    }
}

fn raw_message(parsed: &ParsedMail) -> RawMessage {
    let (sender_email_address, sender_name) = extract_sender(parsed);

    RawMessage {
        sender_email_address,
        sender_name,
        subject: parsed
            .headers
            .get_first_value("Subject")
            .unwrap_or_default(),
        body: extract_text_body(parsed).unwrap_or_default(),
    }
}

fn extract_sender(parsed: &ParsedMail) -> (String, String) {
    let Some(from) = parsed.headers.get_first_header("From") else {
        return (String::new(), String::new());
    };

    let first = mailparse::addrparse_header(from)
        .ok()
        .and_then(|list| match list.iter().next() {
            Some(MailAddr::Single(info)) => Some(info.clone()),
            Some(MailAddr::Group(group)) => group.addrs.first().cloned(),
            None => None,
        });

    first.map_or_else(
        || (from.get_value().trim().to_string(), String::new()),
        |info| (info.addr, info.display_name.unwrap_or_default()),
    )
}

fn extract_text_body(parsed: &ParsedMail) -> Option<String> {
    if parsed.subparts.is_empty() {
        return parsed.get_body().ok();
    }

    parsed.subparts.iter().find_map(|part| {
        if !part.subparts.is_empty() {
            return extract_text_body(part);
        }
        if part.ctype.mimetype.eq_ignore_ascii_case("text/plain") {
            part.get_body().ok()
        } else {
            None
        }
    })
}
