//! pyproject.toml checks: metadata, versioning and tool configuration

use super::{
    is_truthy, lookup, lookup_table, string_list, with_pyproject, CheckDef, Outcome, Pyproject,
};
use std::path::Path;

const CATEGORY: &str = "pyproject";

pub(crate) const CHECKS: &[CheckDef] = &[
    CheckDef {
        name: "pyproject.exists",
        category: CATEGORY,
        weight: 4,
        description: "pyproject.toml exists and parses",
        predicate: check_exists,
    },
    CheckDef {
        name: "pyproject.urls",
        category: CATEGORY,
        weight: 3,
        description: "[project.urls] lists Homepage, Documentation, Repository, Issues",
        predicate: check_urls,
    },
    CheckDef {
        name: "pyproject.dynamic_version",
        category: CATEGORY,
        weight: 3,
        description: "Version is dynamic and derived by hatch-vcs",
        predicate: check_dynamic_version,
    },
    CheckDef {
        name: "pyproject.mypy",
        category: CATEGORY,
        weight: 3,
        description: "[tool.mypy] is strict",
        predicate: check_mypy,
    },
    CheckDef {
        name: "pyproject.ruff",
        category: CATEGORY,
        weight: 3,
        description: "Ruff has per-file-ignores and known-first-party",
        predicate: check_ruff,
    },
    CheckDef {
        name: "pyproject.pytest",
        category: CATEGORY,
        weight: 4,
        description: "Pytest runs with strict markers, strict config and importlib mode",
        predicate: check_pytest,
    },
    CheckDef {
        name: "pyproject.coverage",
        category: CATEGORY,
        weight: 3,
        description: "Coverage measures branches and writes XML",
        predicate: check_coverage,
    },
    CheckDef {
        name: "pyproject.classifiers",
        category: CATEGORY,
        weight: 1,
        description: "Development Status, Python 3 and Typed classifiers",
        predicate: check_classifiers,
    },
    CheckDef {
        name: "pyproject.ruff_rules",
        category: CATEGORY,
        weight: 2,
        description: "Essential ruff rule families are selected",
        predicate: check_ruff_rules,
    },
];

/// Alphabetical so details read the same on every run
const REQUIRED_URLS: [&str; 4] = ["Documentation", "Homepage", "Issues", "Repository"];

const REQUIRED_MYPY: [&str; 4] = [
    "strict",
    "pretty",
    "disallow_incomplete_defs",
    "check_untyped_defs",
];

/// (label, classifier prefix)
const REQUIRED_CLASSIFIERS: [(&str, &str); 3] = [
    ("Development Status", "Development Status ::"),
    ("Python version", "Programming Language :: Python :: 3"),
    ("Typed", "Typing :: Typed"),
];

/// Sorted for stable output
const REQUIRED_RUFF_RULES: [&str; 9] = ["B", "BLE", "E", "F", "I", "N", "PLR", "S", "UP"];

fn check_exists(root: &Path) -> Outcome {
    match Pyproject::load(root) {
        Pyproject::Missing => Outcome::fail(
            "pyproject.toml not found",
            "Create a pyproject.toml at the project root.",
        ),
        Pyproject::Invalid => Outcome::fail(
            "pyproject.toml is unparsable",
            "Fix TOML syntax errors in pyproject.toml.",
        )
        .with_detail("File exists but contains invalid TOML"),
        Pyproject::Parsed(_) => Outcome::pass("pyproject.toml found"),
    }
}

fn check_urls(root: &Path) -> Outcome {
    with_pyproject(root, "Create pyproject.toml with [project.urls] section.", |data| {
        let urls = lookup_table(data, &["project", "urls"]);
        let (present, missing): (Vec<&str>, Vec<&str>) = REQUIRED_URLS
            .iter()
            .copied()
            .partition(|key| urls.is_some_and(|u| u.contains_key(*key)));
        if missing.is_empty() {
            return Outcome::pass("All 4 URLs present");
        }
        Outcome::fail(
            format!("Missing {} URL(s) in [project.urls]", missing.len()),
            format!("Add {} to [project.urls] in pyproject.toml.", missing.join(", ")),
        )
        .with_detail(format!("Missing: {}", missing.join(", ")))
        .with_detail(format!("Present: {}", present.join(", ")))
    })
}

fn check_dynamic_version(root: &Path) -> Outcome {
    with_pyproject(
        root,
        "Create pyproject.toml with dynamic version using hatch-vcs.",
        |data| {
            let dynamic = string_list(lookup(data, &["project", "dynamic"]));
            let requires = string_list(lookup(data, &["build-system", "requires"]));

            let mut problems = Vec::new();
            if !dynamic.contains(&"version") {
                problems.push(r#"Missing: dynamic = ["version"]"#.to_string());
            }
            if !requires.iter().any(|r| r.contains("hatch-vcs")) {
                problems.push("Missing: hatch-vcs in build-system.requires".to_string());
            }
            if problems.is_empty() {
                return Outcome::pass("Dynamic version with hatch-vcs");
            }
            Outcome::fail(
                "Version is not dynamically managed",
                r#"Add hatch-vcs to build-system.requires and set dynamic = ["version"]."#,
            )
            .with_details(problems)
        },
    )
}

fn check_mypy(root: &Path) -> Outcome {
    with_pyproject(root, "Create pyproject.toml with [tool.mypy] section.", |data| {
        let mypy = lookup_table(data, &["tool", "mypy"]);
        let (present, missing): (Vec<&str>, Vec<&str>) =
            REQUIRED_MYPY.iter().copied().partition(|key| {
                mypy.and_then(|m| m.get(*key))
                    .and_then(toml::Value::as_bool)
                    == Some(true)
            });
        if missing.is_empty() {
            return Outcome::pass("MyPy fully configured");
        }
        let settings: Vec<String> = missing.iter().map(|k| format!("{k} = true")).collect();
        Outcome::fail(
            format!("MyPy config incomplete: missing {} setting(s)", missing.len()),
            format!("Add {} to [tool.mypy].", settings.join(", ")),
        )
        .with_detail(format!("Missing: {}", missing.join(", ")))
        .with_detail(format!("Present: {}", present.join(", ")))
    })
}

fn check_ruff(root: &Path) -> Outcome {
    with_pyproject(root, "Create pyproject.toml with [tool.ruff.lint] section.", |data| {
        let lint = lookup_table(data, &["tool", "ruff", "lint"]);
        let mut problems = Vec::new();
        if !lint.is_some_and(|l| l.contains_key("per-file-ignores")) {
            problems.push("Missing: [tool.ruff.lint.per-file-ignores]".to_string());
        }
        let isort = lookup_table(data, &["tool", "ruff", "lint", "isort"]);
        if !isort.is_some_and(|i| i.contains_key("known-first-party")) {
            problems.push("Missing: known-first-party in [tool.ruff.lint.isort]".to_string());
        }
        if problems.is_empty() {
            return Outcome::pass("Ruff fully configured");
        }
        Outcome::fail(
            "Ruff config incomplete",
            "Add per-file-ignores for tests and known-first-party to ruff config.",
        )
        .with_details(problems)
    })
}

/// `addopts` as one string, whether written as an array or a plain string
fn addopts(pytest: Option<&toml::Table>) -> String {
    match pytest.and_then(|p| p.get("addopts")) {
        Some(toml::Value::String(s)) => s.clone(),
        other => string_list(other).join(" "),
    }
}

fn check_pytest(root: &Path) -> Outcome {
    with_pyproject(root, "Create pyproject.toml with [tool.pytest.ini_options].", |data| {
        let pytest = lookup_table(data, &["tool", "pytest", "ini_options"]);
        let opts = addopts(pytest);
        let has_key = |key: &str| pytest.is_some_and(|p| p.contains_key(key));

        let mut problems = Vec::new();
        for flag in ["--strict-markers", "--strict-config", "--import-mode=importlib"] {
            if !opts.contains(flag) {
                problems.push(format!("Missing: {flag} in addopts"));
            }
        }
        if !has_key("pythonpath") {
            problems.push(r#"Missing: pythonpath = ["src"]"#.to_string());
        }
        if !has_key("filterwarnings") {
            problems.push("Missing: filterwarnings".to_string());
        }
        if problems.is_empty() {
            return Outcome::pass("Pytest fully configured");
        }
        Outcome::fail(
            format!("Pytest config incomplete: missing {} setting(s)", problems.len()),
            "Add missing settings to [tool.pytest.ini_options].",
        )
        .with_details(problems)
    })
}

fn check_coverage(root: &Path) -> Outcome {
    with_pyproject(root, "Create pyproject.toml with [tool.coverage] sections.", |data| {
        let coverage = lookup_table(data, &["tool", "coverage"]);
        let run = lookup_table(data, &["tool", "coverage", "run"]);
        let report = lookup_table(data, &["tool", "coverage", "report"]);

        let mut problems = Vec::new();
        if !is_truthy(run.and_then(|r| r.get("branch"))) {
            problems.push("Missing: branch = true in [tool.coverage.run]".to_string());
        }
        if !is_truthy(run.and_then(|r| r.get("relative_files"))) {
            problems.push("Missing: relative_files = true in [tool.coverage.run]".to_string());
        }
        if !coverage.is_some_and(|c| c.contains_key("xml")) {
            problems.push("Missing: [tool.coverage.xml] section".to_string());
        }
        if !report.is_some_and(|r| r.contains_key("exclude_lines")) {
            problems.push("Missing: exclude_lines in [tool.coverage.report]".to_string());
        }
        if problems.is_empty() {
            return Outcome::pass("Coverage fully configured");
        }
        Outcome::fail(
            format!("Coverage config incomplete: missing {} setting(s)", problems.len()),
            "Add missing settings to [tool.coverage] sections.",
        )
        .with_details(problems)
    })
}

fn check_classifiers(root: &Path) -> Outcome {
    with_pyproject(root, "Add classifiers to [project] in pyproject.toml.", |data| {
        let classifiers = string_list(lookup(data, &["project", "classifiers"]));
        let missing: Vec<&str> = REQUIRED_CLASSIFIERS
            .iter()
            .filter(|(_, prefix)| !classifiers.iter().any(|c| c.starts_with(*prefix)))
            .map(|(label, _)| *label)
            .collect();
        if missing.is_empty() {
            return Outcome::pass("Required classifiers present");
        }
        Outcome::fail(
            format!("Missing {} required classifier(s)", missing.len()),
            "Add Development Status, Python version, and Typing :: Typed classifiers.",
        )
        .with_detail(format!("Missing: {}", missing.join(", ")))
    })
}

fn check_ruff_rules(root: &Path) -> Outcome {
    with_pyproject(
        root,
        "Add [tool.ruff.lint] select with E, F, I, UP, B, S, BLE, PLR, N.",
        |data| {
            let mut rules = string_list(lookup(data, &["tool", "ruff", "lint", "select"]));
            rules.extend(string_list(lookup(
                data,
                &["tool", "ruff", "lint", "extend-select"],
            )));

            let missing: Vec<&str> = if rules.contains(&"ALL") {
                vec![]
            } else {
                REQUIRED_RUFF_RULES
                    .iter()
                    .copied()
                    .filter(|rule| !rules.contains(rule))
                    .collect()
            };
            if missing.is_empty() {
                return Outcome::pass("Essential ruff rules activated");
            }
            Outcome::fail(
                format!("Missing {} essential ruff rule(s)", missing.len()),
                format!("Add {} to [tool.ruff.lint] select.", missing.join(", ")),
            )
            .with_detail(format!("Missing: {}", missing.join(", ")))
        },
    )
}
