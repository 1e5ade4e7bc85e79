//! CLI entry point for treeport

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Component, Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use treeport::{
    OsFs, RenderConfig, SizeReporter, TreeRenderer, TreeWalker, print_report_summary,
    print_structure_summary, write_tree_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treeport")]
#[command(about = "Build output size reports and project structure trees")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Control color output: auto, always, never
    #[arg(
        long = "color",
        value_name = "WHEN",
        default_value = "auto",
        global = true
    )]
    color: ColorMode,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a per-file size report of a build output directory
    Report {
        /// Directory to scan
        #[arg(default_value = "dist")]
        path: PathBuf,

        /// Report file to write
        #[arg(short = 'o', long = "output", default_value = "bundle_report.txt")]
        output: PathBuf,
    },
    /// Write a textual tree of a project's directory structure
    Structure {
        /// Directory to render
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Structure file to write
        #[arg(
            short = 'o',
            long = "output",
            default_value = "project_structure.txt"
        )]
        output: PathBuf,

        /// Ignore entries with this name or glob pattern (can be used multiple times)
        #[arg(short = 'I', long = "ignore")]
        ignore: Vec<String>,

        /// Start from an empty ignore set instead of the built-in defaults
        #[arg(long = "no-default-ignores")]
        no_default_ignores: bool,

        /// Write the structure as JSON instead of a text tree
        #[arg(long = "json")]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);

    let result = match args.command {
        Command::Report { path, output } => run_report(&path, &output, use_color),
        Command::Structure {
            path,
            output,
            ignore,
            no_default_ignores,
            json,
        } => run_structure(&path, &output, ignore, no_default_ignores, json, use_color),
    };

    if let Err(e) = result {
        eprintln!("treeport: {}", e);
        process::exit(1);
    }
}

fn run_report(root: &Path, output: &Path, use_color: bool) -> io::Result<()> {
    if !root.exists() {
        eprintln!(
            "treeport: cannot access '{}': No such file or directory",
            root.display()
        );
        process::exit(1);
    }

    let total = SizeReporter::new(&OsFs).save(root, output)?;
    print_report_summary(output, total, use_color)
}

fn run_structure(
    path: &Path,
    output: &Path,
    ignore: Vec<String>,
    no_default_ignores: bool,
    json: bool,
    use_color: bool,
) -> io::Result<()> {
    if !path.exists() {
        eprintln!(
            "treeport: cannot access '{}': No such file or directory",
            path.display()
        );
        process::exit(1);
    }

    // The structure file carries the root as an absolute path on its first line.
    let root = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    let root = normalize_path(&root);

    let base = if no_default_ignores {
        RenderConfig::empty()
    } else {
        RenderConfig::default()
    };
    let config = base.with_ignores(ignore);

    if json {
        // Create the output before the walk, so an output path inside the
        // scanned root appears in its own listing and reruns stay identical.
        let mut writer = BufWriter::new(File::create(output)?);
        let tree = TreeWalker::new(config).walk(&OsFs, &root)?;
        write_tree_json(&tree, &mut writer)?;
        writer.flush()?;
    } else {
        TreeRenderer::new(config).save(&OsFs, &root, output)?;
    }
    print_structure_summary(output, use_color)
}

/// Lexically normalize a path: drop `.` components and resolve `..` against
/// the preceding component, without touching the file system.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(Component::ParentDir);
                }
            }
            c => normalized.push(c),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_strips_cur_dir() {
        assert_eq!(
            normalize_path(Path::new("/work/project/.")),
            PathBuf::from("/work/project")
        );
    }

    #[test]
    fn test_normalize_path_resolves_parent_dir() {
        assert_eq!(
            normalize_path(Path::new("/work/project/scripts/..")),
            PathBuf::from("/work/project")
        );
    }

    #[test]
    fn test_normalize_path_keeps_plain_paths() {
        assert_eq!(
            normalize_path(Path::new("/work/project")),
            PathBuf::from("/work/project")
        );
    }
}
