//! Agent reporter: minimal JSON for automated callers
//!
//! Passing checks are reduced to a count; only failures carry detail.

use crate::models::{CheckResult, Grade, ProjectResult};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct AgentReport<'a> {
    score: u32,
    grade: Grade,
    passed_count: usize,
    failed: Vec<AgentFailure<'a>>,
}

#[derive(Serialize)]
struct AgentFailure<'a> {
    name: &'a str,
    message: &'a str,
    details: &'a [String],
    fix: &'a str,
}

impl<'a> From<&'a CheckResult> for AgentFailure<'a> {
    fn from(c: &'a CheckResult) -> Self {
        Self {
            name: &c.name,
            message: &c.message,
            details: &c.details,
            fix: &c.fix,
        }
    }
}

fn build(result: &ProjectResult) -> AgentReport<'_> {
    AgentReport {
        score: result.score(),
        grade: result.grade(),
        passed_count: result.passed_count(),
        failed: result.failures().iter().map(AgentFailure::from).collect(),
    }
}

pub fn to_value(result: &ProjectResult) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(build(result))?)
}

/// Render as a single line of JSON
pub fn render(result: &ProjectResult) -> Result<String> {
    Ok(serde_json::to_string(&build(result))?)
}
