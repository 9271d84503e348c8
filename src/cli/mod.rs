//! CLI command definitions and handlers

mod check;
mod init;
mod list;

pub use check::CheckArgs;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// goldcheck - audit a Python project against the gold-standard layout
#[derive(Parser, Debug)]
#[command(name = "goldcheck")]
#[command(
    version,
    about = "Audit a Python project against a gold-standard setup and score it 0-100",
    long_about = "goldcheck inspects a Python project's files (pyproject.toml, CI workflows, \
pre-commit hooks, docs, layout, dependency groups, changelog tooling) and reports \
which gold-standard practices are missing, with a concrete fix for each.\n\n\
Run without a subcommand to check the current directory:\n  \
goldcheck .",
    after_help = "\
Examples:
  goldcheck .                               Check current directory
  goldcheck check ../my-lib -c ci           Only the CI checks
  goldcheck check . --format agent          Compact JSON for automated callers
  goldcheck check . --fail-under 90         Exit 1 when the score is below 90
  goldcheck list                            Show every check and its weight"
)]
pub struct Cli {
    /// Path to the project (default: current directory)
    #[arg(global = true, default_value = ".")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Number of parallel workers (1-64, default: auto)
    #[arg(long, global = true, value_parser = parse_workers)]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run checks and report the score (default command)
    #[command(after_help = "\
Examples:
  goldcheck check .                          Compact report
  goldcheck check . -v                       List every check
  goldcheck check . --format json -o out.json    Full JSON report to a file
  goldcheck check . --skip-check changelog.no_manual")]
    Check(CheckArgs),

    /// List registered checks with their weights
    List {
        /// Only list one category
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write an example goldcheck.toml into the project
    Init,

    /// Show version information
    Version,
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Check(args)) => check::run(&cli.path, cli.workers, args),

        Some(Commands::List { category, json }) => list::run(category.as_deref(), json),

        Some(Commands::Init) => init::run(&cli.path),

        Some(Commands::Version) => {
            println!("goldcheck {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        None => {
            check_unknown_subcommand(&cli.path)?;
            check::run(&cli.path, cli.workers, CheckArgs::default())
        }
    }
}

/// Check if the path looks like a mistyped subcommand and bail with a helpful message
fn check_unknown_subcommand(path: &Path) -> Result<()> {
    let path_str = path.to_string_lossy();
    let looks_like_command = !path.exists()
        && !path_str.contains('/')
        && !path_str.contains('\\')
        && !path_str.starts_with('.');
    if looks_like_command {
        anyhow::bail!(
            "Unknown command '{}'. Run 'goldcheck --help' for available commands.\n\nDid you mean one of: check, list, init, version?",
            path_str
        );
    }
    Ok(())
}
