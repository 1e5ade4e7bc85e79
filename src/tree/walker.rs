//! TreeWalker - builds the full tree in memory for JSON output

use std::io;
use std::path::Path;

use crate::fs::FileSystem;

use super::config::RenderConfig;
use super::json_types::TreeNode;

/// Walks a directory tree into a [`TreeNode`] hierarchy, applying the same
/// ignore set as the text renderer. Entries are sorted lexicographically.
pub struct TreeWalker {
    config: RenderConfig,
}

impl TreeWalker {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn walk<F: FileSystem>(&self, fs: &F, root: &Path) -> io::Result<TreeNode> {
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        self.walk_dir(fs, root, name)
    }

    fn walk_dir<F: FileSystem>(&self, fs: &F, dir: &Path, name: String) -> io::Result<TreeNode> {
        let mut entries = fs.list_entries(dir)?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut children = Vec::new();
        for entry in entries {
            if self.config.is_ignored(&entry.name) {
                continue;
            }
            let path = dir.join(&entry.name);
            if entry.is_dir {
                children.push(self.walk_dir(fs, &path, entry.name)?);
            } else {
                let size_bytes = fs.file_size(&path)?;
                children.push(TreeNode::File {
                    name: entry.name,
                    path,
                    size_bytes,
                });
            }
        }

        Ok(TreeNode::Dir {
            name,
            path: dir.to_path_buf(),
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::test_utils::MemFs;

    use super::*;

    #[test]
    fn test_walk_builds_sorted_tree() {
        let mut fs = MemFs::new();
        fs.add_file("root/z.txt", 10);
        fs.add_file("root/a.txt", 20);
        fs.add_file("root/src/lib.rs", 30);

        let tree = TreeWalker::new(RenderConfig::empty())
            .walk(&fs, Path::new("root"))
            .unwrap();

        let TreeNode::Dir { name, children, .. } = &tree else {
            panic!("root should be a directory");
        };
        assert_eq!(name, "root");
        let names: Vec<&str> = children.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a.txt", "src", "z.txt"]);
        assert!(children[1].is_dir());
    }

    #[test]
    fn test_walk_excludes_ignored_subtrees() {
        let mut fs = MemFs::new();
        fs.add_file("root/node_modules/pkg/index.js", 1);
        fs.add_file("root/src/app.ts", 1);

        let tree = TreeWalker::new(RenderConfig::default())
            .walk(&fs, Path::new("root"))
            .unwrap();

        let TreeNode::Dir { children, .. } = &tree else {
            panic!("root should be a directory");
        };
        let names: Vec<&str> = children.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["src"]);
    }

    #[test]
    fn test_walk_records_file_sizes() {
        let mut fs = MemFs::new();
        fs.add_file("root/big.bin", 4096);

        let tree = TreeWalker::new(RenderConfig::empty())
            .walk(&fs, Path::new("root"))
            .unwrap();

        let TreeNode::Dir { children, .. } = &tree else {
            panic!("root should be a directory");
        };
        let TreeNode::File { size_bytes, .. } = &children[0] else {
            panic!("expected a file");
        };
        assert_eq!(*size_bytes, 4096);
    }

    #[test]
    fn test_json_shape() {
        let mut fs = MemFs::new();
        fs.add_file("root/a.txt", 100);

        let tree = TreeWalker::new(RenderConfig::empty())
            .walk(&fs, Path::new("root"))
            .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&tree).unwrap()).unwrap();

        assert_eq!(json["type"], "dir");
        assert_eq!(json["children"][0]["type"], "file");
        assert_eq!(json["children"][0]["name"], "a.txt");
        assert_eq!(json["children"][0]["size_bytes"], 100);
    }
}
