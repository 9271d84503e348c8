//! Repository structure checks

use super::{lookup, python_packages, CheckDef, Outcome, Pyproject};
use std::path::{Path, PathBuf};

const CATEGORY: &str = "structure";

pub(crate) const CHECKS: &[CheckDef] = &[
    CheckDef {
        name: "structure.src_layout",
        category: CATEGORY,
        weight: 4,
        description: "Package lives under src/<pkg>/",
        predicate: check_src_layout,
    },
    CheckDef {
        name: "structure.py_typed",
        category: CATEGORY,
        weight: 2,
        description: "Package ships a py.typed marker",
        predicate: check_py_typed,
    },
    CheckDef {
        name: "structure.tests_dir",
        category: CATEGORY,
        weight: 3,
        description: "tests/ contains test_*.py files",
        predicate: check_tests_dir,
    },
    CheckDef {
        name: "structure.contributing",
        category: CATEGORY,
        weight: 2,
        description: "CONTRIBUTING.md exists",
        predicate: check_contributing,
    },
    CheckDef {
        name: "structure.license",
        category: CATEGORY,
        weight: 3,
        description: "LICENSE exists",
        predicate: check_license,
    },
    CheckDef {
        name: "structure.uv_lock",
        category: CATEGORY,
        weight: 2,
        description: "uv.lock is committed (here or at the workspace root)",
        predicate: check_uv_lock,
    },
    CheckDef {
        name: "structure.python_version",
        category: CATEGORY,
        weight: 1,
        description: ".python-version pins the interpreter",
        predicate: check_python_version,
    },
];

fn check_src_layout(root: &Path) -> Outcome {
    let src = root.join("src");
    if !src.is_dir() {
        return Outcome::fail(
            "src/ directory not found",
            "Migrate to src/ layout: move package into src/<package_name>/.",
        )
        .with_detail("Expected: src/<package_name>/__init__.py");
    }
    let packages = python_packages(&src);
    if packages.is_empty() {
        return Outcome::fail(
            "No Python package found in src/",
            "Create src/<package_name>/__init__.py.",
        )
        .with_detail("src/ exists but contains no package with __init__.py");
    }
    Outcome::pass(format!("src/ layout with {} package(s)", packages.len()))
}

fn check_py_typed(root: &Path) -> Outcome {
    let src = root.join("src");
    if !src.is_dir() {
        return Outcome::fail(
            "src/ directory not found",
            "Create src/<package_name>/py.typed marker file.",
        );
    }
    if python_packages(&src)
        .iter()
        .any(|pkg| pkg.join("py.typed").exists())
    {
        return Outcome::pass("py.typed marker found");
    }
    Outcome::fail(
        "py.typed marker not found",
        "Create an empty src/<package_name>/py.typed file.",
    )
    .with_detail("PEP 561: py.typed marks package as providing type information")
}

/// Number of `test_*.py` files anywhere under `dir`
fn count_test_files(dir: &Path) -> usize {
    ignore::WalkBuilder::new(dir)
        .standard_filters(false)
        .build()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_some_and(|t| t.is_file()))
        .filter(|e| {
            let name = e.file_name().to_string_lossy();
            name.starts_with("test_") && name.ends_with(".py")
        })
        .count()
}

fn check_tests_dir(root: &Path) -> Outcome {
    let tests = root.join("tests");
    if !tests.is_dir() {
        return Outcome::fail(
            "tests/ directory not found",
            "Create tests/ directory with test files.",
        );
    }
    let count = count_test_files(&tests);
    if count == 0 {
        return Outcome::fail(
            "No test files found in tests/",
            "Add test files matching test_*.py pattern.",
        )
        .with_detail("Expected: tests/test_*.py files");
    }
    Outcome::pass(format!("{count} test file(s) found"))
}

fn check_contributing(root: &Path) -> Outcome {
    if !root.join("CONTRIBUTING.md").exists() {
        return Outcome::fail(
            "CONTRIBUTING.md not found",
            "Create CONTRIBUTING.md with dev setup and commit conventions.",
        );
    }
    Outcome::pass("CONTRIBUTING.md found")
}

fn check_license(root: &Path) -> Outcome {
    if !root.join("LICENSE").exists() {
        return Outcome::fail(
            "LICENSE file not found",
            "Create a LICENSE file (MIT, Apache-2.0, or EUPL-1.2).",
        );
    }
    Outcome::pass("LICENSE file found")
}

/// Nearest ancestor whose pyproject.toml declares `[tool.uv.workspace]`
fn workspace_root(root: &Path) -> Option<PathBuf> {
    root.ancestors()
        .skip(1)
        .find(|dir| {
            Pyproject::load(dir)
                .table()
                .is_some_and(|t| lookup(t, &["tool", "uv", "workspace"]).is_some())
        })
        .map(Path::to_path_buf)
}

fn check_uv_lock(root: &Path) -> Outcome {
    if root.join("uv.lock").exists() {
        return Outcome::pass("uv.lock found");
    }
    match workspace_root(root) {
        Some(ws) if ws.join("uv.lock").exists() => {
            Outcome::pass(format!("uv.lock found at workspace root ({})", ws.display()))
        }
        Some(ws) => Outcome::fail(
            "uv.lock not found at workspace root",
            format!("Run 'uv lock' in {} and commit uv.lock.", ws.display()),
        )
        .with_detail(format!("Workspace root: {}", ws.display())),
        None => Outcome::fail(
            "uv.lock not found",
            "Run 'uv lock' and commit uv.lock for reproducible installs.",
        ),
    }
}

fn check_python_version(root: &Path) -> Outcome {
    if !root.join(".python-version").exists() {
        return Outcome::fail(
            ".python-version not found",
            "Run 'uv python pin 3.12' to create .python-version.",
        );
    }
    Outcome::pass(".python-version found")
}
