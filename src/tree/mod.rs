//! Directory tree walking and rendering
//!
//! Two paths, chosen by output format:
//!
//! - `TreeRenderer`: renders the box-drawing text tree line by line
//! - `TreeWalker`: builds the full tree in memory, required for JSON output

mod config;
mod json_types;
mod renderer;
mod walker;

pub use config::{DEFAULT_IGNORES, RenderConfig};
pub use json_types::TreeNode;
pub use renderer::TreeRenderer;
pub use walker::TreeWalker;
