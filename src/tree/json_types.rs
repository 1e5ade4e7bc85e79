//! Serialization types for JSON tree output

use std::path::PathBuf;

use serde::Serialize;

/// Tree node for JSON output - builds the full tree in memory.
///
/// The text renderer never materializes this; it exists so `--json` can
/// serialize the whole hierarchy in one shot.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        size_bytes: u64,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }
}
