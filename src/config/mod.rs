//! Configuration module for goldcheck
//!
//! This module handles project-level configuration (`goldcheck.toml`):
//! - CLI defaults (format, verbosity, workers, pass threshold)
//! - Checks skipped by default

mod project_config;

pub use project_config::{
    load_project_config, ChecksConfig, CliDefaults, ProjectConfig, CONFIG_FILE_NAME,
    EXAMPLE_CONFIG,
};
