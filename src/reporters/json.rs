//! JSON reporter
//!
//! Full mirror of a [`ProjectResult`]. Categories serialize as an object keyed
//! by category name, in run order.

use crate::models::{CategoryScore, CheckResult, Grade, ProjectResult};
use anyhow::Result;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    project: String,
    score: u32,
    grade: Grade,
    categories: Categories<'a>,
    checks: Vec<JsonCheck<'a>>,
    failures: Vec<JsonFailure<'a>>,
}

struct Categories<'a>(&'a [CategoryScore]);

#[derive(Serialize)]
struct Subtotal {
    earned: u32,
    total: u32,
}

impl Serialize for Categories<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for cat in self.0 {
            map.serialize_entry(
                &cat.category,
                &Subtotal {
                    earned: cat.earned,
                    total: cat.total,
                },
            )?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    name: &'a str,
    category: &'a str,
    passed: bool,
    earned: u32,
    weight: u32,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    name: &'a str,
    weight: u32,
    message: &'a str,
    details: &'a [String],
    fix: &'a str,
}

impl<'a> JsonReport<'a> {
    fn new(result: &'a ProjectResult) -> Self {
        Self {
            project: result.project_path().display().to_string(),
            score: result.score(),
            grade: result.grade(),
            categories: Categories(result.categories()),
            checks: result.checks().iter().map(JsonCheck::from).collect(),
            failures: result.failures().iter().map(JsonFailure::from).collect(),
        }
    }
}

impl<'a> From<&'a CheckResult> for JsonCheck<'a> {
    fn from(c: &'a CheckResult) -> Self {
        Self {
            name: &c.name,
            category: &c.category,
            passed: c.passed,
            earned: c.earned(),
            weight: c.weight,
            message: &c.message,
        }
    }
}

impl<'a> From<&'a CheckResult> for JsonFailure<'a> {
    fn from(c: &'a CheckResult) -> Self {
        Self {
            name: &c.name,
            weight: c.weight,
            message: &c.message,
            details: &c.details,
            fix: &c.fix,
        }
    }
}

/// Structured form of the full report
pub fn to_value(result: &ProjectResult) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(JsonReport::new(result))?)
}

/// Render as pretty-printed JSON
pub fn render(result: &ProjectResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(result))?)
}

/// Render as compact JSON (no whitespace)
pub fn render_compact(result: &ProjectResult) -> Result<String> {
    Ok(serde_json::to_string(&JsonReport::new(result))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_json_render_valid() {
        let json = render(&test_result()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["project"], "/work/demo-pkg");
        assert_eq!(parsed["score"], 63);
        assert_eq!(parsed["grade"], "C");
        assert_eq!(parsed["categories"]["ci"]["earned"], 4);
        assert_eq!(parsed["categories"]["docs"]["total"], 9);
        assert_eq!(parsed["checks"].as_array().map(Vec::len), Some(5));
        assert_eq!(parsed["failures"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_json_categories_keep_run_order() {
        let json = render_compact(&test_result()).unwrap();
        let ci = json.find("\"ci\":{").unwrap();
        let docs = json.find("\"docs\":{").unwrap();
        assert!(ci < docs);
    }

    #[test]
    fn test_json_render_compact() {
        let json = render_compact(&test_result()).unwrap();
        assert!(!json.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["grade"], "C");
    }

    #[test]
    fn test_json_check_and_failure_shapes() {
        let value = to_value(&test_result()).unwrap();
        let check = &value["checks"][1];
        assert_eq!(check["name"], "ci.lint_job");
        assert_eq!(check["passed"], false);
        assert_eq!(check["earned"], 0);
        assert_eq!(check["weight"], 3);
        assert!(check.get("fix").is_none());

        let failure = &value["failures"][0];
        assert_eq!(failure["name"], "ci.lint_job");
        assert_eq!(failure["fix"], "Repair ci.lint_job.");
        assert_eq!(failure["details"][0], "Missing: thing");
        assert!(failure.get("passed").is_none());
    }
}
