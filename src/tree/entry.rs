//! Directory listing

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{TreeError, TreeResult};

/// A named child of a directory, as seen by one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    file_name: OsString,
    name: String,
    path: PathBuf,
    is_dir: bool,
}

impl DirectoryEntry {
    fn new(parent: &Path, file_name: OsString, is_dir: bool) -> Self {
        Self {
            name: file_name.to_string_lossy().into_owned(),
            path: parent.join(&file_name),
            file_name,
            is_dir,
        }
    }

    /// Display name (lossy UTF-8).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True for real directories. Symlinks are never directories here.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// List the immediate children of `path`, sorted by raw file name.
///
/// Uses the entry's own file type, so a symlink to a directory is a leaf.
pub fn read_sorted_entries(path: &Path) -> TreeResult<Vec<DirectoryEntry>> {
    let read_dir = std::fs::read_dir(path).map_err(|e| TreeError::from_listing(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| TreeError::from_listing(path, e))?;
        let is_dir = dir_entry
            .file_type()
            .map_err(|e| TreeError::from_listing(&dir_entry.path(), e))?
            .is_dir();
        entries.push(DirectoryEntry::new(path, dir_entry.file_name(), is_dir));
    }

    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(entries)
}
