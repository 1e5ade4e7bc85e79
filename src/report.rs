//! Size reporting for build output directories
//!
//! Walks a directory tree top-down and writes one line per file plus a
//! cumulative total line after each directory's file listing. The running
//! total spans the entire walk; it is threaded through the recursion rather
//! than held in shared state.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::fs::FileSystem;

/// Walks a directory tree and writes a line-oriented size report.
pub struct SizeReporter<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> SizeReporter<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Write the report for everything under `root` to `out`.
    ///
    /// Returns the final cumulative total in kilobytes.
    pub fn write_report<W: Write>(&self, root: &Path, out: &mut W) -> io::Result<f64> {
        self.report_dir(root, out, 0.0)
    }

    /// Write the report to a file, truncating any previous contents.
    pub fn save(&self, root: &Path, output: &Path) -> io::Result<f64> {
        let mut writer = BufWriter::new(File::create(output)?);
        let total = self.write_report(root, &mut writer)?;
        writer.flush()?;
        Ok(total)
    }

    fn report_dir<W: Write>(&self, dir: &Path, out: &mut W, mut total: f64) -> io::Result<f64> {
        let mut entries = self.fs.list_entries(dir)?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        for entry in entries.iter().filter(|e| !e.is_dir) {
            let path = dir.join(&entry.name);
            let kilobytes = self.fs.file_size(&path)? as f64 / 1024.0;
            total += kilobytes;
            writeln!(out, "{}: {:.2} KB", path.display(), kilobytes)?;
        }

        // One cumulative total line per visited directory, reflecting the
        // total so far across the whole walk, not this directory alone.
        writeln!(out, "Total size: {:.2} KB", total)?;

        for entry in entries.iter().filter(|e| e.is_dir) {
            total = self.report_dir(&dir.join(&entry.name), out, total)?;
        }

        Ok(total)
    }
}
