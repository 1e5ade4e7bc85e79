//! Box-drawing text rendering of a directory tree

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::fs::FileSystem;

use super::config::RenderConfig;

/// Renders a directory hierarchy as an indented box-drawing tree, skipping
/// entries in the ignore set entirely.
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the tree under `root` as a newline-terminated string.
    ///
    /// An empty directory renders as the empty string.
    pub fn render<F: FileSystem>(&self, fs: &F, root: &Path) -> io::Result<String> {
        let mut lines = Vec::new();
        self.render_dir(fs, root, "", &mut lines)?;
        if lines.is_empty() {
            Ok(String::new())
        } else {
            Ok(lines.join("\n") + "\n")
        }
    }

    /// Render the tree and write it to a file, preceded by the root path on
    /// its own first line. Truncates any previous contents.
    ///
    /// The output file is created before the walk, so an output path inside
    /// the scanned root appears in its own listing and reruns stay
    /// byte-identical.
    pub fn save<F: FileSystem>(&self, fs: &F, root: &Path, output: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(output)?);
        writeln!(writer, "{}", root.display())?;
        let tree = self.render(fs, root)?;
        writer.write_all(tree.as_bytes())?;
        writer.flush()
    }

    fn render_dir<F: FileSystem>(
        &self,
        fs: &F,
        dir: &Path,
        prefix: &str,
        lines: &mut Vec<String>,
    ) -> io::Result<()> {
        let mut entries = fs.list_entries(dir)?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let last_index = entries.len().saturating_sub(1);
        for (i, entry) in entries.iter().enumerate() {
            if self.config.is_ignored(&entry.name) {
                continue;
            }

            // Last-sibling status is judged against the full sorted listing,
            // ignored entries included: a directory whose final entry is
            // ignored renders its last visible line with the mid connector.
            let is_last = i == last_index;
            let connector = if is_last { "└── " } else { "├── " };
            lines.push(format!("{}{}{}", prefix, connector, entry.name));

            if entry.is_dir {
                let extension = if is_last { "    " } else { "│   " };
                let child_prefix = format!("{}{}", prefix, extension);
                self.render_dir(fs, &dir.join(&entry.name), &child_prefix, lines)?;
            }
        }
        Ok(())
    }
}
