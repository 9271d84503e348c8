//! Pre-commit hook and Makefile checks

use super::{with_text, CheckDef, Outcome};
use std::path::Path;

const CATEGORY: &str = "tooling";

pub(crate) const CHECKS: &[CheckDef] = &[
    CheckDef {
        name: "tooling.precommit_exists",
        category: CATEGORY,
        weight: 3,
        description: ".pre-commit-config.yaml exists",
        predicate: check_precommit_exists,
    },
    CheckDef {
        name: "tooling.precommit_ruff",
        category: CATEGORY,
        weight: 2,
        description: "Pre-commit runs ruff",
        predicate: check_precommit_ruff,
    },
    CheckDef {
        name: "tooling.precommit_mypy",
        category: CATEGORY,
        weight: 2,
        description: "Pre-commit runs mypy",
        predicate: check_precommit_mypy,
    },
    CheckDef {
        name: "tooling.precommit_conventional",
        category: CATEGORY,
        weight: 2,
        description: "Pre-commit enforces conventional commit messages",
        predicate: check_precommit_conventional,
    },
    CheckDef {
        name: "tooling.precommit_basic",
        category: CATEGORY,
        weight: 1,
        description: "Pre-commit has whitespace, EOF and YAML hooks",
        predicate: check_precommit_basic,
    },
    CheckDef {
        name: "tooling.precommit_installed",
        category: CATEGORY,
        weight: 2,
        description: "Pre-commit hooks are installed in .git/hooks",
        predicate: check_precommit_installed,
    },
    CheckDef {
        name: "tooling.makefile",
        category: CATEGORY,
        weight: 3,
        description: "Makefile provides the standard targets",
        predicate: check_makefile,
    },
];

const PRECOMMIT_CONFIG: &str = ".pre-commit-config.yaml";

const BASIC_HOOKS: [&str; 3] = ["trailing-whitespace", "end-of-file-fixer", "check-yaml"];

const MAKE_TARGETS: [&str; 8] = [
    "install",
    "check",
    "lint",
    "format",
    "test",
    "audit",
    "clean",
    "docs-serve",
];

/// Shared shape of the single-hook checks
fn hook_check(root: &Path, hook: &str, pass: &str, fail: &str, detail: &str, fix: &str) -> Outcome {
    with_text(
        root,
        PRECOMMIT_CONFIG,
        || Outcome::fail(fail, fix).with_detail(detail),
        |content| {
            if content.contains(hook) {
                Outcome::pass(pass)
            } else {
                Outcome::fail(fail, fix).with_detail(detail)
            }
        },
    )
}

fn check_precommit_exists(root: &Path) -> Outcome {
    with_text(
        root,
        PRECOMMIT_CONFIG,
        || {
            Outcome::fail(
                ".pre-commit-config.yaml not found",
                "Create .pre-commit-config.yaml with ruff, mypy, and conventional-commit hooks.",
            )
        },
        |_| Outcome::pass(".pre-commit-config.yaml found"),
    )
}

fn check_precommit_ruff(root: &Path) -> Outcome {
    hook_check(
        root,
        "ruff",
        "Ruff hook present",
        "No ruff hook in pre-commit",
        "ruff-pre-commit hook should be configured",
        "Add ruff-pre-commit repo with ruff and ruff-format hooks.",
    )
}

fn check_precommit_mypy(root: &Path) -> Outcome {
    hook_check(
        root,
        "mypy",
        "MyPy hook present",
        "No mypy hook in pre-commit",
        "mirrors-mypy hook should be configured",
        "Add pre-commit/mirrors-mypy repo with mypy hook.",
    )
}

fn check_precommit_conventional(root: &Path) -> Outcome {
    hook_check(
        root,
        "conventional-pre-commit",
        "Conventional commits hook present",
        "No conventional-commits hook in pre-commit",
        "conventional-pre-commit hook enforces commit message format",
        "Add compilerla/conventional-pre-commit repo.",
    )
}

fn check_precommit_basic(root: &Path) -> Outcome {
    with_text(
        root,
        PRECOMMIT_CONFIG,
        || {
            Outcome::fail(
                "No pre-commit config",
                "Add pre-commit-hooks repo with basic hooks.",
            )
            .with_detail(format!("Missing: {}", BASIC_HOOKS.join(", ")))
        },
        |content| {
            let missing: Vec<&str> = BASIC_HOOKS
                .iter()
                .copied()
                .filter(|hook| !content.contains(hook))
                .collect();
            if missing.is_empty() {
                return Outcome::pass("Basic hooks present");
            }
            Outcome::fail(
                format!("Missing {} basic hook(s)", missing.len()),
                format!("Add {} to pre-commit-hooks.", missing.join(", ")),
            )
            .with_detail(format!("Missing: {}", missing.join(", ")))
        },
    )
}

fn check_precommit_installed(root: &Path) -> Outcome {
    if !root.join(PRECOMMIT_CONFIG).exists() {
        return Outcome::pass("No pre-commit config (nothing to install)");
    }
    if root.join(".git").join("hooks").join("pre-commit").exists() {
        return Outcome::pass("Pre-commit hooks installed");
    }
    Outcome::fail(
        "Pre-commit hooks not installed",
        "Run 'pre-commit install' to activate hooks.",
    )
    .with_detail(".pre-commit-config.yaml exists but hooks are not activated")
}

fn check_makefile(root: &Path) -> Outcome {
    with_text(
        root,
        "Makefile",
        || {
            Outcome::fail(
                "Makefile not found",
                format!("Create a Makefile with {} targets.", MAKE_TARGETS.join(", ")),
            )
        },
        |content| {
            let missing: Vec<&str> = MAKE_TARGETS
                .iter()
                .copied()
                .filter(|target| !content.contains(&format!("{target}:")))
                .collect();
            if missing.is_empty() {
                return Outcome::pass("Makefile complete");
            }
            Outcome::fail(
                format!("Makefile missing {} target(s)", missing.len()),
                format!("Add targets to Makefile: {}.", missing.join(", ")),
            )
            .with_detail(format!("Missing targets: {}", missing.join(", ")))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testutil::{
        empty_project, gold_project, write, write_bytes, GOLD_PRECOMMIT, NOT_UTF8,
    };

    #[test]
    fn test_gold_passes_every_check() {
        let gold = gold_project();
        for def in CHECKS {
            let result = def.run(gold.path());
            assert!(result.passed, "{} failed on gold: {}", def.name, result.message);
        }
    }

    #[test]
    fn test_empty_project() {
        let empty = empty_project();
        for def in CHECKS {
            let result = def.run(empty.path());
            if def.name == "tooling.precommit_installed" {
                assert!(result.passed, "nothing to install on an empty project");
            } else {
                assert!(!result.passed, "{} passed on empty dir", def.name);
                assert!(!result.fix.is_empty(), "{} has no fix", def.name);
            }
        }
    }

    #[test]
    fn test_precommit_not_installed() {
        let dir = empty_project();
        write(dir.path(), PRECOMMIT_CONFIG, GOLD_PRECOMMIT);
        let outcome = check_precommit_installed(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.fix, "Run 'pre-commit install' to activate hooks.");
    }

    #[test]
    fn test_precommit_basic_partial() {
        let dir = empty_project();
        write(
            dir.path(),
            PRECOMMIT_CONFIG,
            "repos:\n  - hooks:\n      - id: trailing-whitespace\n",
        );
        let outcome = check_precommit_basic(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "Missing 2 basic hook(s)");
        assert_eq!(outcome.details, vec!["Missing: end-of-file-fixer, check-yaml"]);
    }

    #[test]
    fn test_makefile_missing_targets() {
        let dir = empty_project();
        write(dir.path(), "Makefile", "install:\n\tuv sync\n\ntest:\n\tuv run pytest\n");
        let outcome = check_makefile(dir.path());
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "Makefile missing 6 target(s)");
        assert_eq!(
            outcome.fix,
            "Add targets to Makefile: check, lint, format, audit, clean, docs-serve."
        );
    }

    #[test]
    fn test_unreadable_config_is_not_reported_missing() {
        let dir = empty_project();
        write_bytes(dir.path(), PRECOMMIT_CONFIG, NOT_UTF8);
        write_bytes(dir.path(), "Makefile", NOT_UTF8);

        let exists = check_precommit_exists(dir.path());
        assert!(!exists.passed);
        assert_eq!(
            exists.message,
            ".pre-commit-config.yaml exists but could not be read"
        );
        assert!(exists.fix.contains("UTF-8"));

        for outcome in [
            check_precommit_ruff(dir.path()),
            check_precommit_basic(dir.path()),
            check_makefile(dir.path()),
        ] {
            assert!(outcome.message.contains("could not be read"), "{}", outcome.message);
            assert!(!outcome.fix.starts_with("Create"));
        }

        // the config is present, so installation is judged on the git hook
        assert!(!check_precommit_installed(dir.path()).passed);
    }
}
