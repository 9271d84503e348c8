//! CLI flag contract tests
//!
//! Runs the compiled binary against fixture projects and verifies exit codes,
//! output formats and goldcheck.toml defaults.

mod common;

use common::{empty_project, gold_project, goldcheck, run_check, write};

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Invalid JSON on stdout")
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_gold_project_exits_zero() {
    let gold = gold_project();
    let (code, stdout, _) = run_check(gold.path(), &["--format", "json"]);
    assert_eq!(code, 0);
    let report = parse_json(&stdout);
    assert_eq!(report["score"], 100);
    assert_eq!(report["grade"], "A");
    assert_eq!(report["failures"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_empty_project_exits_nonzero() {
    let empty = empty_project();
    let (code, stdout, stderr) = run_check(empty.path(), &["--format", "json"]);
    assert_eq!(code, 1);
    let report = parse_json(&stdout);
    assert_eq!(report["grade"], "F");
    assert!(stderr.contains("below --fail-under 100"));
}

#[test]
fn test_fail_under_threshold() {
    let gold = gold_project();
    write(gold.path(), "CHANGELOG.md", "# Changelog\n");

    let (code, _, _) = run_check(gold.path(), &["--format", "json"]);
    assert_eq!(code, 1, "98 is below the default threshold of 100");

    let (code, _, _) = run_check(gold.path(), &["--format", "json", "--fail-under", "98"]);
    assert_eq!(code, 0);

    let empty = empty_project();
    let (code, _, _) = run_check(empty.path(), &["--fail-under", "0"]);
    assert_eq!(code, 0);
}

#[test]
fn test_unknown_category_lists_valid_names() {
    let empty = empty_project();
    let (code, stdout, stderr) = run_check(empty.path(), &["--category", "not_a_real_category"]);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown category 'not_a_real_category'"));
    assert!(stderr.contains("changelog, ci, deps, docs, pyproject, structure, tooling"));
}

#[test]
fn test_file_path_is_rejected() {
    let dir = empty_project();
    let file = dir.path().join("pyproject.toml");
    std::fs::write(&file, "[project]\n").unwrap();
    let (code, _, stderr) = run_check(&file, &[]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not a directory"));
}

#[test]
fn test_missing_path_is_rejected() {
    let dir = empty_project();
    let (code, _, stderr) = run_check(&dir.path().join("nope"), &[]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Path does not exist"));
}

// ============================================================================
// Formats and filters
// ============================================================================

#[test]
fn test_agent_format_shape() {
    let empty = empty_project();
    let (_, stdout, _) = run_check(empty.path(), &["--format", "agent"]);
    let report = parse_json(stdout.trim());
    let obj = report.as_object().expect("object");
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["failed", "grade", "passed_count", "score"]);
    assert_eq!(report["passed_count"], 2);
    assert_eq!(report["failed"].as_array().map(Vec::len), Some(37));
    assert_eq!(stdout.trim().lines().count(), 1);
}

#[test]
fn test_category_filter() {
    let gold = gold_project();
    let (code, stdout, _) = run_check(gold.path(), &["-c", "structure", "-f", "json"]);
    assert_eq!(code, 0);
    let report = parse_json(&stdout);
    let checks = report["checks"].as_array().expect("checks");
    assert_eq!(checks.len(), 7);
    assert!(checks.iter().all(|c| c["category"] == "structure"));
    assert_eq!(report["categories"]["structure"]["total"], 17);
}

#[test]
fn test_skip_check() {
    let gold = gold_project();
    write(gold.path(), "CHANGELOG.md", "# Changelog\n");
    let (code, stdout, _) = run_check(
        gold.path(),
        &["-f", "json", "--skip-check", "changelog.no_manual"],
    );
    assert_eq!(code, 0);
    let report = parse_json(&stdout);
    assert_eq!(report["score"], 100);
    assert_eq!(report["checks"].as_array().map(Vec::len), Some(38));
}

#[test]
fn test_text_report() {
    let gold = gold_project();
    let (code, stdout, _) = run_check(gold.path(), &["--no-color"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("📋 goldcheck:"));
    assert!(stdout.contains("Score: 100/100  Grade: A"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_verbose_text_lists_every_check() {
    let gold = gold_project();
    let (_, stdout, _) = run_check(gold.path(), &["--verbose", "--no-color"]);
    for name in ["pyproject.ruff_rules", "ci.dependabot", "changelog.no_manual"] {
        assert!(stdout.contains(name), "verbose output missing {name}");
    }
}

#[test]
fn test_output_file() {
    let gold = gold_project();
    let out = gold.path().join("report.json");
    let out_str = out.to_str().unwrap();
    let (code, stdout, stderr) = run_check(gold.path(), &["-f", "json", "-o", out_str]);
    assert_eq!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Report written to"));
    let report = parse_json(&std::fs::read_to_string(&out).unwrap());
    assert_eq!(report["grade"], "A");
}

#[test]
fn test_logs_stay_off_stdout() {
    let gold = gold_project();
    let path = gold.path().to_str().unwrap();
    let output = goldcheck(&["--log-level", "debug", "check", path, "-f", "json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_json(&stdout);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Running check"));
}

#[test]
fn test_no_subcommand_runs_check() {
    let gold = gold_project();
    let output = goldcheck(&[gold.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Score: 100/100"));
}

// ============================================================================
// goldcheck.toml
// ============================================================================

#[test]
fn test_config_defaults_apply() {
    let empty = empty_project();
    write(
        empty.path(),
        "goldcheck.toml",
        "[defaults]\nformat = \"agent\"\nfail_under = 0\n",
    );
    let (code, stdout, _) = run_check(empty.path(), &[]);
    assert_eq!(code, 0);
    let report = parse_json(stdout.trim());
    assert!(report.get("failed").is_some());
}

#[test]
fn test_cli_overrides_config() {
    let empty = empty_project();
    write(
        empty.path(),
        "goldcheck.toml",
        "[defaults]\nformat = \"agent\"\nfail_under = 0\n",
    );
    let (code, stdout, _) = run_check(empty.path(), &["-f", "json", "--fail-under", "50"]);
    assert_eq!(code, 1);
    let report = parse_json(&stdout);
    assert!(report.get("checks").is_some());
}

#[test]
fn test_config_skip_list() {
    let gold = gold_project();
    write(gold.path(), "CHANGELOG.md", "# Changelog\n");
    write(
        gold.path(),
        "goldcheck.toml",
        "[checks]\nskip = [\"changelog.no_manual\"]\n",
    );
    let (code, _, _) = run_check(gold.path(), &["-f", "json"]);
    assert_eq!(code, 0);
}

#[test]
fn test_init_then_check() {
    let gold = gold_project();
    let path = gold.path().to_str().unwrap();
    let output = goldcheck(&["init", path]);
    assert!(output.status.success());
    assert!(gold.path().join("goldcheck.toml").exists());

    let (code, _, _) = run_check(gold.path(), &["-f", "json"]);
    assert_eq!(code, 0);
}

// ============================================================================
// list / version
// ============================================================================

#[test]
fn test_list_json() {
    let output = goldcheck(&["list", "--json"]);
    assert!(output.status.success());
    let checks = parse_json(&String::from_utf8_lossy(&output.stdout));
    let checks = checks.as_array().expect("array");
    assert_eq!(checks.len(), 39);
    let total: u64 = checks.iter().filter_map(|c| c["weight"].as_u64()).sum();
    assert_eq!(total, 100);
}

#[test]
fn test_list_table() {
    let output = goldcheck(&["list", "-c", "changelog"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("changelog.gitcliff"));
    assert!(stdout.contains("2 checks, 5 points"));

    let output = goldcheck(&["list", "-c", ""]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("39 checks, 100 points"));

    let output = goldcheck(&["list", "-c", "bogus"]);
    assert!(!output.status.success());
}

#[test]
fn test_version() {
    let output = goldcheck(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("goldcheck {}", env!("CARGO_PKG_VERSION"))
    );
}
