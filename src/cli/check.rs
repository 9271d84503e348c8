//! Check command - run the audit and report the score

use crate::config::{load_project_config, ProjectConfig};
use crate::engine::CheckEngine;
use crate::reporters::{self, OutputFormat, RenderOptions};
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Score required for a zero exit status unless configured otherwise
const DEFAULT_FAIL_UNDER: u32 = 100;

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Only run one category (pyproject, ci, tooling, docs, structure, deps, changelog)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Output format: text, json, agent
    #[arg(long, short = 'f', value_parser = ["text", "json", "agent"])]
    pub format: Option<String>,

    /// List every check, not only failures
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Exit with status 1 when the score is below this value (0-100, default 100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub fail_under: Option<u32>,

    /// Skip a check by name (repeatable)
    #[arg(long)]
    pub skip_check: Vec<String>,

    /// Disable colors in text output
    #[arg(long)]
    pub no_color: bool,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Settings after merging CLI flags over goldcheck.toml
#[derive(Debug, PartialEq)]
struct Effective {
    format: OutputFormat,
    verbose: bool,
    color: bool,
    workers: usize,
    fail_under: u32,
    skip: Vec<String>,
}

fn resolve(args: &CheckArgs, workers: Option<usize>, config: &ProjectConfig) -> Result<Effective> {
    let defaults = &config.defaults;

    let format = match args.format.as_deref().or(defaults.format.as_deref()) {
        Some(name) => OutputFormat::from_str(name)?,
        None => OutputFormat::Text,
    };

    let mut skip = config.checks.skip.clone();
    for name in &args.skip_check {
        if !skip.contains(name) {
            skip.push(name.clone());
        }
    }

    let no_color = args.no_color || defaults.no_color.unwrap_or(false);

    Ok(Effective {
        format,
        verbose: args.verbose || defaults.verbose.unwrap_or(false),
        color: !no_color && args.output.is_none() && console::colors_enabled(),
        workers: workers.or(defaults.workers).unwrap_or(0),
        fail_under: args
            .fail_under
            .or(defaults.fail_under)
            .unwrap_or(DEFAULT_FAIL_UNDER),
        skip,
    })
}

/// Run the check command
pub fn run(path: &Path, workers: Option<usize>, args: CheckArgs) -> Result<()> {
    let repo_path = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !repo_path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", repo_path.display());
    }

    let config = load_project_config(&repo_path);
    let settings = resolve(&args, workers, &config)?;
    debug!("Effective check settings: {:?}", settings);

    let engine = CheckEngine::new(settings.workers).with_skipped(settings.skip.iter().cloned());
    let result = engine.run(&repo_path, args.category.as_deref())?;

    let output = reporters::report_with_format(
        &result,
        settings.format,
        RenderOptions {
            verbose: settings.verbose,
            color: settings.color,
        },
    )?;

    match &args.output {
        Some(out_path) => {
            std::fs::write(out_path, &output)
                .with_context(|| format!("Failed to write report to {}", out_path.display()))?;
            // stderr keeps stdout clean for machine-readable formats
            eprintln!(
                "{}Report written to: {}",
                style("📄 ").bold(),
                style(out_path.display()).cyan()
            );
        }
        None if settings.format == OutputFormat::Text => print!("{}", output),
        None => println!("{}", output),
    }

    check_fail_threshold(result.score(), settings.fail_under);
    Ok(())
}

fn check_fail_threshold(score: u32, fail_under: u32) {
    if score < fail_under {
        eprintln!(
            "Failing: score {} is below --fail-under {}",
            score, fail_under
        );
        std::process::exit(1);
    }
}
