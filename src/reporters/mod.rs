//! Output reporters for goldcheck results
//!
//! Supports multiple output formats:
//! - `text` - Human report grouped by category, compact or verbose
//! - `json` - Full machine-readable mirror of the result
//! - `agent` - Minimal JSON for token-constrained callers (failures only)

pub mod agent;
pub mod json;
pub mod text;

use crate::models::ProjectResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Agent,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "agent" => Ok(OutputFormat::Agent),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, agent",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Agent => write!(f, "agent"),
        }
    }
}

/// Rendering knobs that only the text report uses
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// List every check instead of summarising passes
    pub verbose: bool,
    /// Emit ANSI color codes
    pub color: bool,
}

/// Render a result in the specified format
pub fn report(result: &ProjectResult, format: &str, options: RenderOptions) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(result, fmt, options)
}

/// Render a result using an OutputFormat enum
pub fn report_with_format(
    result: &ProjectResult,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_styled(result, options)),
        OutputFormat::Json => json::render(result),
        OutputFormat::Agent => agent::render(result),
    }
}
