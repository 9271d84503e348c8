//! Dependency group checks (PEP 735 `[dependency-groups]`)

use super::{lookup, with_pyproject, CheckDef, Outcome};
use std::path::Path;

const CATEGORY: &str = "deps";

pub(crate) const CHECKS: &[CheckDef] = &[
    CheckDef {
        name: "deps.dev_group",
        category: CATEGORY,
        weight: 3,
        description: "dev group has pytest, ruff, mypy, pre-commit",
        predicate: check_dev_group,
    },
    CheckDef {
        name: "deps.docs_group",
        category: CATEGORY,
        weight: 2,
        description: "docs group has the MkDocs toolchain",
        predicate: check_docs_group,
    },
];

const DEV_DEPS: [&str; 4] = ["pytest", "ruff", "mypy", "pre-commit"];

const DOCS_DEPS: [&str; 4] = [
    "mkdocs-material",
    "mkdocstrings",
    "mkdocs-gen-files",
    "mkdocs-literate-nav",
];

/// All entries of a dependency group flattened into one lowercase string.
/// Non-string entries (include-group tables) are rendered as TOML.
fn group_text(data: &toml::Table, group: &str) -> String {
    lookup(data, &["dependency-groups", group])
        .and_then(toml::Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|e| match e.as_str() {
                    Some(s) => s.to_string(),
                    None => e.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .unwrap_or_default()
}

fn group_check(root: &Path, group: &str, required: &[&str], label: &str) -> Outcome {
    let fix = format!("Create pyproject.toml with [dependency-groups] {group} group.");
    with_pyproject(root, &fix, |data| {
        let text = group_text(data, group);
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|dep| !text.contains(dep))
            .collect();
        if missing.is_empty() {
            return Outcome::pass(format!("{label} deps complete"));
        }
        Outcome::fail(
            format!("{label} group missing {} dep(s)", missing.len()),
            format!("Add {} to [dependency-groups] {group}.", missing.join(", ")),
        )
        .with_detail(format!("Missing: {}", missing.join(", ")))
    })
}

fn check_dev_group(root: &Path) -> Outcome {
    group_check(root, "dev", &DEV_DEPS, "Dev")
}

fn check_docs_group(root: &Path) -> Outcome {
    group_check(root, "docs", &DOCS_DEPS, "Docs")
}
