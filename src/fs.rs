//! Minimal file-system capability interface
//!
//! Both traversals (size reporting and tree rendering) are written against
//! this trait instead of `std::fs` directly, so their logic can be tested
//! on an in-memory tree without touching a real disk.

use std::io;
use std::path::Path;

/// A single directory entry discovered during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub name: String,
    pub is_dir: bool,
}

impl FsEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// What the traversals need from a file system: directory listing with
/// file/directory discrimination, and file size queries.
///
/// `list_entries` makes no ordering promise; callers sort.
pub trait FileSystem {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<FsEntry>>;
    fn is_dir(&self, path: &Path) -> bool;
    fn file_size(&self, path: &Path) -> io::Result<u64>;
}

/// The real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl FileSystem for OsFs {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            entries.push(FsEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(path.metadata()?.len())
    }
}
