//! Core data models for goldcheck audit results

use crate::scoring;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Letter grade banding of the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Emoji shown next to the grade in the human report
    pub fn emoji(&self) -> &'static str {
        match self {
            Grade::A => "🏆",
            Grade::B => "✅",
            Grade::C => "⚠️",
            Grade::D => "🔧",
            Grade::F => "❌",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one check run against a project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckResult {
    /// Stable dotted identifier, e.g. `pyproject.mypy`
    pub name: String,
    pub category: String,
    pub passed: bool,
    pub weight: u32,
    /// One-line summary of why the check passed or failed
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
    /// Remediation; never empty on a failure
    #[serde(default)]
    pub fix: String,
}

impl CheckResult {
    /// Points credited: the full weight when passed, otherwise 0
    pub fn earned(&self) -> u32 {
        if self.passed {
            self.weight
        } else {
            0
        }
    }
}

/// Subtotal for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: String,
    pub earned: u32,
    pub total: u32,
}

/// Full outcome of one audit run.
///
/// Only constructible through [`ProjectResult::from_checks`], so `score`,
/// `grade`, `categories` and `failures` always agree with `checks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectResult {
    project_path: PathBuf,
    checks: Vec<CheckResult>,
    score: u32,
    grade: Grade,
    categories: Vec<CategoryScore>,
    failures: Vec<CheckResult>,
}

impl ProjectResult {
    /// Fold a flat list of results into an aggregated project result
    pub fn from_checks(project_path: impl Into<PathBuf>, checks: Vec<CheckResult>) -> Self {
        let total_weight: u32 = checks.iter().map(|c| c.weight).sum();
        let total_earned: u32 = checks.iter().map(CheckResult::earned).sum();
        let score = scoring::percentage(total_earned, total_weight);
        let categories = scoring::category_scores(&checks);
        let failures = checks.iter().filter(|c| !c.passed).cloned().collect();

        Self {
            project_path: project_path.into(),
            checks,
            score,
            grade: scoring::compute_grade(score),
            categories,
            failures,
        }
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Directory name of the audited project, for report headers
    pub fn project_name(&self) -> String {
        self.project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.project_path.display().to_string())
    }

    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Category subtotals in first-seen order
    pub fn categories(&self) -> &[CategoryScore] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.category == name)
    }

    pub fn failures(&self) -> &[CheckResult] {
        &self.failures
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Checks belonging to one category, in run order
    pub fn checks_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CheckResult> + 'a {
        self.checks.iter().filter(move |c| c.category == category)
    }
}
