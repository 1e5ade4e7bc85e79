//! Test utilities: an in-memory file system.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::{FileSystem, FsEntry};

/// An in-memory [`FileSystem`] for exercising traversal logic without
/// touching a real disk.
///
/// Files are registered with a size only; no content is stored. Parent
/// directories are created implicitly.
#[derive(Debug, Default)]
pub struct MemFs {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, u64>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory, creating ancestors as needed.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        self.add_ancestors(path);
        self.dirs.insert(path.to_path_buf());
        self
    }

    /// Register a file of the given size in bytes, creating ancestor
    /// directories as needed.
    pub fn add_file(&mut self, path: impl AsRef<Path>, size: u64) -> &mut Self {
        let path = path.as_ref();
        self.add_ancestors(path);
        self.files.insert(path.to_path_buf(), size);
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        let mut current = path.parent();
        while let Some(dir) = current {
            self.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }
}

impl FileSystem for MemFs {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<FsEntry>> {
        if !self.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", path.display()),
            ));
        }

        let child_name = |p: &Path| -> Option<String> {
            if p.parent() == Some(path) {
                p.file_name().map(|n| n.to_string_lossy().to_string())
            } else {
                None
            }
        };

        let mut entries: Vec<FsEntry> = self
            .dirs
            .iter()
            .filter_map(|p| child_name(p).map(FsEntry::dir))
            .collect();
        entries.extend(
            self.files
                .keys()
                .filter_map(|p| child_name(p).map(FsEntry::file)),
        );
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        self.files.get(path).copied().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mem_fs_lists_children_only() {
        let mut fs = MemFs::new();
        fs.add_file("root/a.txt", 10);
        fs.add_file("root/sub/b.txt", 20);

        let mut entries = fs.list_entries(Path::new("root")).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries, vec![FsEntry::file("a.txt"), FsEntry::dir("sub")]);
    }

    #[test]
    fn test_mem_fs_missing_dir_errors() {
        let fs = MemFs::new();
        assert!(fs.list_entries(Path::new("missing")).is_err());
    }

    #[test]
    fn test_mem_fs_file_size() {
        let mut fs = MemFs::new();
        fs.add_file("root/a.txt", 2048);

        assert_eq!(fs.file_size(Path::new("root/a.txt")).unwrap(), 2048);
        assert!(fs.file_size(Path::new("root/missing")).is_err());
    }
}
