//! Folder path resolution

use crate::error::{Error, Result};
use crate::types::FolderNode;

/// Resolve a slash-delimited folder path below `root`
///
/// An empty path resolves to `root`. Segments match child display names
/// exactly and the first matching child wins. Any miss reports the whole
/// requested path, not the failing segment.
pub fn navigate<'a>(root: &'a FolderNode, path: &str) -> Result<&'a FolderNode> {
    if path.is_empty() {
        return Ok(root);
    }

    path.split('/').try_fold(root, |current, segment| {
        if !current.has_children() {
            return Err(Error::FolderNotFound(path.to_string()));
        }
        current
            .child(segment)
            .ok_or_else(|| Error::FolderNotFound(path.to_string()))
    })
}
