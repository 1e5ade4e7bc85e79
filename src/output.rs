//! Stdout summaries and JSON writing

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Print the size report summary: where it was saved and the final total,
/// with the figure highlighted when color is enabled.
pub fn print_report_summary(output: &Path, total_kb: f64, use_color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(use_color));
    writeln!(stdout, "Size report saved to {}", output.display())?;
    write!(stdout, "Total size: ")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "{:.2} KB", total_kb)?;
    stdout.reset()?;
    writeln!(stdout)?;
    Ok(())
}

/// Print the structure summary after a successful render.
pub fn print_structure_summary(output: &Path, use_color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(use_color));
    write!(stdout, "Project structure saved to ")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
    write!(stdout, "{}", output.display())?;
    stdout.reset()?;
    writeln!(stdout)?;
    Ok(())
}

/// Write a tree as pretty-printed JSON.
pub fn write_tree_json<W: Write>(node: &TreeNode, out: &mut W) -> io::Result<()> {
    let json = serde_json::to_string_pretty(node).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_write_tree_json_is_valid_json() {
        let tree = TreeNode::Dir {
            name: "root".to_string(),
            path: PathBuf::from("root"),
            children: vec![TreeNode::File {
                name: "a.txt".to_string(),
                path: PathBuf::from("root/a.txt"),
                size_bytes: 42,
            }],
        };

        let mut out = Vec::new();
        write_tree_json(&tree, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["name"], "root");
        assert_eq!(parsed["children"][0]["size_bytes"], 42);
    }
}
