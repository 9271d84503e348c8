//! Shared helpers for the integration tests
//!
//! Fixture contents come from `goldcheck::checks::fixture`, the same source the
//! unit tests use.

#![allow(dead_code)]

use goldcheck::checks::fixture;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

pub use fixture::NOT_UTF8;

/// Write `content` to `root/rel`, creating parent directories
pub fn write(root: &Path, rel: &str, content: impl AsRef<[u8]>) {
    fixture::write_file(root, rel, content).expect("write fixture file");
}

/// A project satisfying every registered check
pub fn gold_project() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fixture::write_gold_project(dir.path()).expect("write gold project");
    dir
}

/// An empty project directory
pub fn empty_project() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

/// Run the compiled binary with `args`
pub fn goldcheck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_goldcheck"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run goldcheck")
}

/// Run `goldcheck check <dir>` with extra flags; returns (exit code, stdout, stderr)
pub fn run_check(dir: &Path, extra_args: &[&str]) -> (i32, String, String) {
    let path = dir.to_str().expect("utf-8 temp path");
    let mut args = vec!["check", path];
    args.extend_from_slice(extra_args);
    let output = goldcheck(&args);
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}
