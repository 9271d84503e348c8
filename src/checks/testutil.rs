//! Temp-dir wrappers around the gold fixture for unit tests

use std::path::Path;
use tempfile::TempDir;

pub(crate) use super::fixture::{GOLD_PRECOMMIT, NOT_UTF8};

pub(crate) fn write(root: &Path, rel: &str, content: &str) {
    super::fixture::write_file(root, rel, content).expect("write fixture file");
}

/// Write raw bytes (e.g. invalid UTF-8) to `root/rel`
pub(crate) fn write_bytes(root: &Path, rel: &str, content: &[u8]) {
    super::fixture::write_file(root, rel, content).expect("write fixture file");
}

/// A project satisfying every registered check
pub(crate) fn gold_project() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    super::fixture::write_gold_project(dir.path()).expect("write gold project");
    dir
}

/// An empty project directory
pub(crate) fn empty_project() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}
