//! Configuration for tree walking and rendering

use glob::Pattern;

/// Names excluded from traversal by default.
pub const DEFAULT_IGNORES: &[&str] = &["node_modules", ".git", "dist", "__pycache__", ".husky"];

/// Ignore set for tree traversal. Fixed for the duration of a run.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Entry names (or glob patterns) excluded from the tree. Matching
    /// entries are neither rendered nor descended into.
    pub ignore_names: Vec<String>,
}

impl RenderConfig {
    /// An empty ignore set.
    pub fn empty() -> Self {
        Self {
            ignore_names: Vec::new(),
        }
    }

    pub fn with_ignores(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.ignore_names.extend(names);
        self
    }

    /// Check if an entry name is in the ignore set, by exact match or glob.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_names
            .iter()
            .any(|pattern| pattern == name || glob_match(pattern, name))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ignore_names: DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Match a glob pattern against a name.
fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignores() {
        let config = RenderConfig::default();
        assert!(config.is_ignored("node_modules"));
        assert!(config.is_ignored(".git"));
        assert!(config.is_ignored("dist"));
        assert!(!config.is_ignored("src"));
        assert!(!config.is_ignored("package.json"));
    }

    #[test]
    fn test_glob_patterns() {
        let config = RenderConfig::empty().with_ignores(vec!["*.log".to_string()]);
        assert!(config.is_ignored("debug.log"));
        assert!(!config.is_ignored("debug.txt"));
    }

    #[test]
    fn test_exact_match_beats_invalid_glob() {
        // A name that is not a valid glob still matches itself exactly.
        let config = RenderConfig::empty().with_ignores(vec!["[build".to_string()]);
        assert!(config.is_ignored("[build"));
        assert!(!config.is_ignored("build"));
    }
}
