//! Treeport - build output size reports and project structure trees

pub mod fs;
pub mod output;
pub mod report;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use fs::{FileSystem, FsEntry, OsFs};
pub use output::{print_report_summary, print_structure_summary, write_tree_json};
pub use report::SizeReporter;
pub use tree::{DEFAULT_IGNORES, RenderConfig, TreeNode, TreeRenderer, TreeWalker};
