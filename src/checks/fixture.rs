//! Reference project that satisfies every registered check
//!
//! Used by the unit tests and the integration tests alike, so both audit the
//! same gold project.

use std::io;
use std::path::Path;

pub const GOLD_PYPROJECT: &str = r##"[project]
name = "test-pkg"
dynamic = ["version"]
classifiers = [
    "Development Status :: 3 - Alpha",
    "Programming Language :: Python :: 3.12",
    "Typing :: Typed",
]

[project.urls]
Homepage = "https://github.com/org/test-pkg"
Documentation = "https://org.github.io/test-pkg/"
Repository = "https://github.com/org/test-pkg.git"
Issues = "https://github.com/org/test-pkg/issues"

[build-system]
requires = ["hatchling", "hatch-vcs"]
build-backend = "hatchling.build"

[dependency-groups]
dev = [
    "pytest>=8.0",
    "pytest-cov>=4.0",
    "ruff>=0.8",
    "mypy>=1.14",
    "pre-commit>=4.0",
]
docs = [
    "mkdocs-material>=9.0",
    "mkdocstrings[python]>=0.27",
    "mkdocs-gen-files>=0.5",
    "mkdocs-literate-nav>=0.6",
]

[tool.mypy]
strict = true
pretty = true
disallow_incomplete_defs = true
check_untyped_defs = true

[tool.ruff.lint]
select = ["E", "F", "W", "I", "UP", "B", "SIM", "S", "BLE", "PLR", "N", "RUF"]

[tool.ruff.lint.per-file-ignores]
"tests/*" = ["S101"]

[tool.ruff.lint.isort]
known-first-party = ["test_pkg"]

[tool.pytest.ini_options]
addopts = [
    "--strict-markers",
    "--strict-config",
    "--import-mode=importlib",
]
pythonpath = ["src"]
filterwarnings = ["error"]

[tool.coverage.run]
branch = true
relative_files = true

[tool.coverage.xml]
output = "coverage.xml"

[tool.coverage.report]
exclude_lines = ["pragma: no cover"]

[tool.git-cliff.changelog]
header = "# Changelog"
"##;

pub const GOLD_MKDOCS: &str = "site_name: test-pkg
nav:
  - Home: index.md
  - Tutorials:
    - Getting Started: tutorials/getting-started.md
  - How-To Guides:
    - howto/index.md
  - Reference:
    - CLI: reference/cli.md
  - Explanation:
    - Architecture: explanation/architecture.md
plugins:
  - search
  - gen-files:
      scripts:
        - docs/gen_ref_pages.py
  - literate-nav:
      nav_file: SUMMARY.md
  - mkdocstrings:
      handlers:
        python:
          paths: [src]
";

pub const GOLD_PRECOMMIT: &str = "repos:
  - repo: https://github.com/astral-sh/ruff-pre-commit
    rev: v0.8.6
    hooks:
      - id: ruff
      - id: ruff-format
  - repo: https://github.com/pre-commit/mirrors-mypy
    rev: v1.14.1
    hooks:
      - id: mypy
  - repo: https://github.com/compilerla/conventional-pre-commit
    rev: v3.6.0
    hooks:
      - id: conventional-pre-commit
        stages: [commit-msg]
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v5.0.0
    hooks:
      - id: trailing-whitespace
      - id: end-of-file-fixer
      - id: check-yaml
";

pub const GOLD_MAKEFILE: &str = ".PHONY: install check test format lint audit ci clean docs-serve

install:
\tuv sync --all-groups

check: lint audit test

lint:
\tuv run ruff check src tests

format:
\tuv run ruff format src tests

test:
\tuv run pytest

audit:
\tuv run pip-audit

clean:
\trm -rf dist

docs-serve:
\tuv run mkdocs serve
";

pub const GOLD_CI: &str = "name: CI
on:
  push:
    branches: [main]
jobs:
  lint:
    name: Lint
    runs-on: ubuntu-latest
    steps:
      - run: make lint
  security:
    name: Security Audit
    runs-on: ubuntu-latest
    steps:
      - run: uv run pip-audit
  test:
    name: Test
    strategy:
      matrix:
        python-version: [\"3.12\", \"3.13\"]
    steps:
      - run: uv run pytest
  coverage-finish:
    steps:
      - uses: coverallsapp/github-action@v2
";

pub const GOLD_README: &str = "# test-pkg

**A test package**

## Features

- Feature one

## Installation

```bash
uv add test-pkg
```

## Quick Start

```python
import test_pkg
```

## Development

```bash
make install
```

## License

MIT
";

/// Files of the gold project as `(relative path, content)`
pub const GOLD_FILES: &[(&str, &str)] = &[
    ("pyproject.toml", GOLD_PYPROJECT),
    ("mkdocs.yml", GOLD_MKDOCS),
    (".pre-commit-config.yaml", GOLD_PRECOMMIT),
    ("Makefile", GOLD_MAKEFILE),
    (".github/workflows/ci.yml", GOLD_CI),
    (
        ".github/workflows/publish.yml",
        "name: Publish\npermissions:\n  id-token: write\n",
    ),
    (
        ".github/dependabot.yml",
        "version: 2\nupdates:\n  - package-ecosystem: pip\n",
    ),
    ("README.md", GOLD_README),
    ("CONTRIBUTING.md", "# Contributing\n"),
    ("LICENSE", "MIT License\n"),
    ("uv.lock", "version = 1\n"),
    (".python-version", "3.12\n"),
    ("src/test_pkg/__init__.py", ""),
    ("src/test_pkg/py.typed", ""),
    ("tests/test_version.py", "def test_v(): pass\n"),
    ("docs/gen_ref_pages.py", ""),
    (".git/hooks/pre-commit", "#!/bin/sh\n"),
];

/// Bytes that are not valid UTF-8
pub const NOT_UTF8: &[u8] = b"\xff\xfe not utf-8\n";

/// Write `content` to `root/rel`, creating parent directories
pub fn write_file(root: &Path, rel: &str, content: impl AsRef<[u8]>) -> io::Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Populate `root` with every file of the gold project
pub fn write_gold_project(root: &Path) -> io::Result<()> {
    for (rel, content) in GOLD_FILES {
        write_file(root, rel, content)?;
    }
    Ok(())
}
