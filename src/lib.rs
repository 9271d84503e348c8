//! goldcheck - audit a Python project against a gold-standard setup
//!
//! Inspects a project directory for the files and configuration a well-run
//! Python package carries, scores it 0-100 with a letter grade, and explains
//! every failure with a concrete fix.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let result = goldcheck::engine::run(Path::new("."), None)?;
//! println!("{} ({})", result.score(), result.grade());
//! # Ok::<(), goldcheck::error::EngineError>(())
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use engine::CheckEngine;
pub use error::{EngineError, EngineResult};
pub use models::{CategoryScore, CheckResult, Grade, ProjectResult};
