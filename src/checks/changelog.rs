//! Changelog policy: generated by git-cliff, never hand-written

use super::{lookup, CheckDef, Outcome, Pyproject};
use std::path::Path;

const CATEGORY: &str = "changelog";

pub(crate) const CHECKS: &[CheckDef] = &[
    CheckDef {
        name: "changelog.gitcliff",
        category: CATEGORY,
        weight: 3,
        description: "[tool.git-cliff] is configured",
        predicate: check_gitcliff,
    },
    CheckDef {
        name: "changelog.no_manual",
        category: CATEGORY,
        weight: 2,
        description: "No hand-maintained CHANGELOG.md",
        predicate: check_no_manual,
    },
];

fn check_gitcliff(root: &Path) -> Outcome {
    match Pyproject::load(root) {
        Pyproject::Missing => Outcome::fail(
            "pyproject.toml not found",
            "Create pyproject.toml with [tool.git-cliff] section.",
        ),
        Pyproject::Invalid => Outcome::fail(
            "pyproject.toml unparsable",
            "Fix TOML syntax and add [tool.git-cliff] section.",
        ),
        Pyproject::Parsed(data) if lookup(&data, &["tool", "git-cliff"]).is_none() => {
            Outcome::fail(
                "No [tool.git-cliff] config found",
                "Add [tool.git-cliff.changelog] and [tool.git-cliff.git] to pyproject.toml.",
            )
            .with_detail("git-cliff auto-generates CHANGELOG from conventional commits")
        }
        Pyproject::Parsed(_) => Outcome::pass("git-cliff configured"),
    }
}

fn check_no_manual(root: &Path) -> Outcome {
    if root.join("CHANGELOG.md").exists() {
        return Outcome::fail(
            "Manual CHANGELOG.md found",
            "Delete CHANGELOG.md; git-cliff generates it from conventional commits.",
        )
        .with_detail("git-cliff should auto-generate the changelog");
    }
    Outcome::pass("No manual CHANGELOG.md")
}
