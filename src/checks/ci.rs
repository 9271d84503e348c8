//! GitHub Actions and Dependabot checks

use super::{with_text, CheckDef, Outcome};
use std::path::Path;

const CATEGORY: &str = "ci";

pub(crate) const CHECKS: &[CheckDef] = &[
    CheckDef {
        name: "ci.workflow_exists",
        category: CATEGORY,
        weight: 4,
        description: ".github/workflows/ci.yml exists",
        predicate: check_workflow_exists,
    },
    CheckDef {
        name: "ci.lint_job",
        category: CATEGORY,
        weight: 3,
        description: "CI runs a lint job",
        predicate: check_lint_job,
    },
    CheckDef {
        name: "ci.test_job",
        category: CATEGORY,
        weight: 3,
        description: "CI runs a test job",
        predicate: check_test_job,
    },
    CheckDef {
        name: "ci.security_job",
        category: CATEGORY,
        weight: 2,
        description: "CI runs a dependency audit",
        predicate: check_security_job,
    },
    CheckDef {
        name: "ci.coverage_upload",
        category: CATEGORY,
        weight: 2,
        description: "CI uploads coverage to Coveralls or Codecov",
        predicate: check_coverage_upload,
    },
    CheckDef {
        name: "ci.trusted_publishing",
        category: CATEGORY,
        weight: 2,
        description: "publish.yml uses OIDC trusted publishing",
        predicate: check_trusted_publishing,
    },
    CheckDef {
        name: "ci.dependabot",
        category: CATEGORY,
        weight: 2,
        description: ".github/dependabot.yml exists",
        predicate: check_dependabot,
    },
];

const CI_WORKFLOW: &str = ".github/workflows/ci.yml";
const PUBLISH_WORKFLOW: &str = ".github/workflows/publish.yml";

/// Shared shape of the job checks: ci.yml must mention one of `needles`
/// (case-insensitive)
fn job_check(
    root: &Path,
    needles: &[&str],
    pass: &str,
    fail: &str,
    detail: &str,
    fix: &str,
) -> Outcome {
    with_text(
        root,
        CI_WORKFLOW,
        || Outcome::fail(fail, fix).with_detail(detail),
        |content| {
            let content = content.to_lowercase();
            if needles.iter().any(|n| content.contains(n)) {
                Outcome::pass(pass)
            } else {
                Outcome::fail(fail, fix).with_detail(detail)
            }
        },
    )
}

fn check_workflow_exists(root: &Path) -> Outcome {
    with_text(
        root,
        CI_WORKFLOW,
        || {
            Outcome::fail(
                "CI workflow not found",
                "Create .github/workflows/ci.yml with lint, test, and security jobs.",
            )
            .with_detail("Expected: .github/workflows/ci.yml")
        },
        |_| Outcome::pass("CI workflow found"),
    )
}

fn check_lint_job(root: &Path) -> Outcome {
    job_check(
        root,
        &["lint"],
        "Lint job present",
        "No lint job in CI",
        "CI should have a lint/type-check job",
        "Add a lint job to .github/workflows/ci.yml that runs `make lint`.",
    )
}

fn check_test_job(root: &Path) -> Outcome {
    job_check(
        root,
        &["test"],
        "Test job present",
        "No test job in CI",
        "CI should have a test job with python-version matrix",
        "Add a test job with strategy.matrix.python-version.",
    )
}

fn check_security_job(root: &Path) -> Outcome {
    job_check(
        root,
        &["audit"],
        "Security audit job present",
        "No security audit job in CI",
        "CI should run pip-audit for dependency scanning",
        "Add a security job that runs `uv run pip-audit`.",
    )
}

fn check_coverage_upload(root: &Path) -> Outcome {
    job_check(
        root,
        &["coveralls", "codecov"],
        "Coverage upload configured",
        "No coverage upload in CI",
        "CI should upload coverage to Coveralls or Codecov",
        "Add coverallsapp/github-action or codecov/codecov-action step.",
    )
}

fn check_trusted_publishing(root: &Path) -> Outcome {
    with_text(
        root,
        PUBLISH_WORKFLOW,
        || {
            Outcome::fail(
                "Publish workflow not found",
                "Create .github/workflows/publish.yml using pypa/gh-action-pypi-publish \
                 with `permissions: id-token: write`.",
            )
            .with_detail("Expected: .github/workflows/publish.yml")
        },
        |content| {
            if content.contains("PYPI_API_TOKEN") {
                return Outcome::fail(
                    "Publishing uses a long-lived API token",
                    "Remove the PYPI_API_TOKEN secret from publish.yml and rely on \
                     trusted publishing (`id-token: write`).",
                )
                .with_detail("secrets.PYPI_API_TOKEN bypasses OIDC trusted publishing");
            }
            if !content.contains("id-token: write") {
                return Outcome::fail(
                    "Trusted publishing not configured",
                    "Add `permissions: id-token: write` to the publish job and register \
                     the workflow as a trusted publisher on PyPI.",
                )
                .with_detail("Missing: id-token: write");
            }
            Outcome::pass("Trusted publishing (OIDC) configured")
        },
    )
}

fn check_dependabot(root: &Path) -> Outcome {
    if !root.join(".github").join("dependabot.yml").is_file() {
        return Outcome::fail(
            "Dependabot not configured",
            "Create .github/dependabot.yml with pip and github-actions ecosystems.",
        )
        .with_detail("Expected: .github/dependabot.yml");
    }
    Outcome::pass("Dependabot configured")
}
