//! Audit checks
//!
//! Each check is a [`CheckDef`]: a stable name, a category, a fixed weight and
//! a predicate body `fn(&Path) -> Outcome`. Predicates only read the
//! filesystem; a missing or broken file is a failing [`Outcome`], never an
//! error.
//!
//! Categories (in registry order):
//! - `pyproject` - build metadata and tool configuration in pyproject.toml
//! - `ci` - GitHub Actions workflows and Dependabot
//! - `tooling` - pre-commit hooks and Makefile targets
//! - `docs` - MkDocs setup and README sections
//! - `structure` - src layout, tests, license, lock files
//! - `deps` - dependency groups
//! - `changelog` - git-cliff driven changelog policy

mod changelog;
mod ci;
mod deps;
mod docs;
#[doc(hidden)]
pub mod fixture;
mod pyproject;
pub mod registry;
mod structure;
mod tooling;

pub use registry::{Category, REGISTRY};

use crate::models::CheckResult;
use std::path::Path;
use tracing::debug;

/// Predicate body of a check
pub type Predicate = fn(&Path) -> Outcome;

/// A registered check: identity, weight and predicate
#[derive(Clone, Copy)]
pub struct CheckDef {
    pub name: &'static str,
    pub category: &'static str,
    pub weight: u32,
    pub description: &'static str,
    pub predicate: Predicate,
}

impl std::fmt::Debug for CheckDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckDef")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

impl CheckDef {
    /// Evaluate against a project root
    pub fn run(&self, root: &Path) -> CheckResult {
        let outcome = (self.predicate)(root);
        CheckResult {
            name: self.name.to_string(),
            category: self.category.to_string(),
            passed: outcome.passed,
            weight: self.weight,
            message: outcome.message,
            details: outcome.details,
            fix: outcome.fix,
        }
    }
}

/// What a predicate found, before identity and weight are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    pub message: String,
    pub details: Vec<String>,
    pub fix: String,
}

impl Outcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            details: vec![],
            fix: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            details: vec![],
            fix: fix.into(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details.extend(details);
        self
    }
}

/// State of a plain-text project file
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TextFile {
    Missing,
    /// Present but not readable as UTF-8 text; carries the read error
    Unreadable(String),
    Text(String),
}

impl TextFile {
    pub(crate) fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => TextFile::Text(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => TextFile::Missing,
            Err(e) => {
                debug!("Cannot read {}: {}", path.display(), e);
                TextFile::Unreadable(e.to_string())
            }
        }
    }
}

/// Failure for a file that exists but cannot be read as text
pub(crate) fn unreadable(rel: &str, reason: &str) -> Outcome {
    Outcome::fail(
        format!("{rel} exists but could not be read"),
        format!("Re-save {rel} as UTF-8 text and check its file permissions."),
    )
    .with_detail(format!("Read error: {reason}"))
}

/// Run `body` on the text of `root/rel`. A missing file yields `missing()`,
/// an unreadable one the shared [`unreadable`] failure.
pub(crate) fn with_text(
    root: &Path,
    rel: &str,
    missing: impl FnOnce() -> Outcome,
    body: impl FnOnce(String) -> Outcome,
) -> Outcome {
    match TextFile::load(&root.join(rel)) {
        TextFile::Missing => missing(),
        TextFile::Unreadable(reason) => unreadable(rel, &reason),
        TextFile::Text(content) => body(content),
    }
}

/// State of a project's pyproject.toml
#[derive(Debug, Clone)]
pub(crate) enum Pyproject {
    Missing,
    Invalid,
    Parsed(toml::Table),
}

impl Pyproject {
    pub(crate) fn load(dir: &Path) -> Self {
        let path = dir.join("pyproject.toml");
        let content = match TextFile::load(&path) {
            TextFile::Missing => return Pyproject::Missing,
            TextFile::Unreadable(_) => return Pyproject::Invalid,
            TextFile::Text(content) => content,
        };
        match content.parse::<toml::Table>() {
            Ok(table) => Pyproject::Parsed(table),
            Err(e) => {
                debug!("Invalid TOML in {}: {}", path.display(), e);
                Pyproject::Invalid
            }
        }
    }

    pub(crate) fn table(&self) -> Option<&toml::Table> {
        match self {
            Pyproject::Parsed(table) => Some(table),
            _ => None,
        }
    }
}

/// Run `body` against a parsed pyproject.toml, or fail with a fixed message
/// when the file is missing or unparsable.
pub(crate) fn with_pyproject(
    root: &Path,
    fix: &str,
    body: impl FnOnce(&toml::Table) -> Outcome,
) -> Outcome {
    match Pyproject::load(root).table() {
        Some(table) => body(table),
        None => Outcome::fail("pyproject.toml not found or unparsable", fix),
    }
}

/// Walk nested tables by key, e.g. `["tool", "ruff", "lint"]`
pub(crate) fn lookup<'a>(table: &'a toml::Table, keys: &[&str]) -> Option<&'a toml::Value> {
    let (first, rest) = keys.split_first()?;
    let mut value = table.get(*first)?;
    for key in rest {
        value = value.as_table()?.get(*key)?;
    }
    Some(value)
}

/// Nested table at `keys`, if every step is a table
pub(crate) fn lookup_table<'a>(table: &'a toml::Table, keys: &[&str]) -> Option<&'a toml::Table> {
    lookup(table, keys)?.as_table()
}

/// String entries of an array value; non-string entries are skipped
pub(crate) fn string_list(value: Option<&toml::Value>) -> Vec<&str> {
    value
        .and_then(toml::Value::as_array)
        .map(|items| items.iter().filter_map(toml::Value::as_str).collect())
        .unwrap_or_default()
}

/// Loose truthiness: `true`, non-zero numbers, non-empty strings and collections
pub(crate) fn is_truthy(value: Option<&toml::Value>) -> bool {
    match value {
        Some(toml::Value::Boolean(b)) => *b,
        Some(toml::Value::Integer(i)) => *i != 0,
        Some(toml::Value::Float(f)) => *f != 0.0,
        Some(toml::Value::String(s)) => !s.is_empty(),
        Some(toml::Value::Array(a)) => !a.is_empty(),
        Some(toml::Value::Table(t)) => !t.is_empty(),
        Some(toml::Value::Datetime(_)) => true,
        None => false,
    }
}

/// Directory entries of `dir` that are Python packages (contain `__init__.py`)
pub(crate) fn python_packages(dir: &Path) -> Vec<std::path::PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return vec![];
    };
    let mut packages: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir() && p.join("__init__.py").is_file())
        .collect();
    packages.sort();
    packages
}

#[cfg(test)]
pub(crate) mod testutil;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> toml::Table {
        src.parse::<toml::Table>().expect("valid toml")
    }

    #[test]
    fn test_lookup_nested() {
        let table = parse("[tool.ruff.lint]\nselect = [\"E\", \"F\"]\n");
        assert!(lookup(&table, &["tool", "ruff", "lint", "select"]).is_some());
        assert!(lookup(&table, &["tool", "mypy"]).is_none());
        assert!(lookup(&table, &["tool", "ruff", "lint", "select", "x"]).is_none());
        assert_eq!(
            string_list(lookup(&table, &["tool", "ruff", "lint", "select"])),
            vec!["E", "F"]
        );
    }

    #[test]
    fn test_is_truthy() {
        let table = parse("a = true\nb = false\nc = 0\nd = \"x\"\ne = []\n");
        assert!(is_truthy(table.get("a")));
        assert!(!is_truthy(table.get("b")));
        assert!(!is_truthy(table.get("c")));
        assert!(is_truthy(table.get("d")));
        assert!(!is_truthy(table.get("e")));
        assert!(!is_truthy(table.get("missing")));
    }

    #[test]
    fn test_pyproject_states() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(Pyproject::load(dir.path()), Pyproject::Missing));

        std::fs::write(dir.path().join("pyproject.toml"), "[project\nname=").expect("write");
        assert!(matches!(Pyproject::load(dir.path()), Pyproject::Invalid));

        std::fs::write(dir.path().join("pyproject.toml"), "[project]\nname = \"x\"\n")
            .expect("write");
        assert!(Pyproject::load(dir.path()).table().is_some());
    }

    #[test]
    fn test_text_file_states() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        assert_eq!(TextFile::load(&path), TextFile::Missing);

        std::fs::write(&path, b"\xff\xfe broken").expect("write");
        assert!(matches!(TextFile::load(&path), TextFile::Unreadable(_)));

        std::fs::write(&path, "hello").expect("write");
        assert_eq!(TextFile::load(&path), TextFile::Text("hello".into()));
    }

    #[test]
    fn test_with_text_unreadable_is_corrective() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("Makefile"), b"\xff\xfe").expect("write");
        let outcome = with_text(
            dir.path(),
            "Makefile",
            || Outcome::fail("Makefile not found", "Create a Makefile."),
            |_| Outcome::pass("never"),
        );
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "Makefile exists but could not be read");
        assert!(outcome.fix.starts_with("Re-save Makefile as UTF-8"));
        assert!(outcome.details[0].starts_with("Read error:"));
    }

    #[test]
    fn test_unreadable_pyproject_is_invalid() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("pyproject.toml"), b"\xff\xfe").expect("write");
        assert!(matches!(Pyproject::load(dir.path()), Pyproject::Invalid));
    }

    #[test]
    fn test_with_pyproject_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let outcome = with_pyproject(dir.path(), "Create it.", |_| Outcome::pass("never"));
        assert!(!outcome.passed);
        assert_eq!(outcome.message, "pyproject.toml not found or unparsable");
        assert_eq!(outcome.fix, "Create it.");
    }

    #[test]
    fn test_check_def_stamps_identity() {
        fn always_fails(_: &Path) -> Outcome {
            Outcome::fail("nope", "do the thing").with_detail("because")
        }
        let def = CheckDef {
            name: "demo.fails",
            category: "demo",
            weight: 7,
            description: "Always fails",
            predicate: always_fails,
        };
        let result = def.run(Path::new("/nonexistent"));
        assert_eq!(result.name, "demo.fails");
        assert_eq!(result.category, "demo");
        assert_eq!(result.weight, 7);
        assert_eq!(result.earned(), 0);
        assert_eq!(result.details, vec!["because".to_string()]);
    }
}
