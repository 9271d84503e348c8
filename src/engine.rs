//! Check execution engine
//!
//! The CheckEngine resolves which checks to run and folds their results:
//! - Validates the requested category against the registry
//! - Runs the selected checks in parallel using rayon
//! - Keeps registry order regardless of completion order
//! - Isolates panics so one broken check cannot starve its siblings
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      CheckEngine                        │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Resolve categories (all, or one by name)            │
//! │  2. Drop skipped checks                                 │
//! │  3. Run checks in parallel (rayon, indexed collect)     │
//! │  4. Fold into ProjectResult                             │
//! └─────────────────────────────────────────────────────────┘
//! ```

use crate::checks::{CheckDef, Category, REGISTRY};
use crate::error::{EngineError, EngineResult};
use crate::models::{CheckResult, ProjectResult};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Runs registered checks against a project root
pub struct CheckEngine {
    registry: &'static [Category],
    workers: usize,
    skipped: Vec<String>,
}

impl CheckEngine {
    /// Create a new check engine
    ///
    /// # Arguments
    /// * `workers` - Number of worker threads (0 = auto-detect)
    pub fn new(workers: usize) -> Self {
        let actual_workers = if workers == 0 {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
                .min(16)
        } else {
            workers
        };

        Self {
            registry: REGISTRY,
            workers: actual_workers,
            skipped: Vec::new(),
        }
    }

    /// Use a different check table
    pub fn with_registry(mut self, registry: &'static [Category]) -> Self {
        self.registry = registry;
        self
    }

    /// Leave out individual checks by name
    ///
    /// Names are validated against the registry in use when [`run`](Self::run)
    /// is called; unknown ones log a warning.
    pub fn with_skipped<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skipped.extend(names.into_iter().map(Into::into));
        self
    }

    /// Skip-list entries that name no check in the active registry
    fn unknown_skips(&self) -> Vec<&str> {
        self.skipped
            .iter()
            .map(String::as_str)
            .filter(|name| {
                !self
                    .registry
                    .iter()
                    .any(|c| c.checks.iter().any(|d| d.name == *name))
            })
            .collect()
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Sorted names of every category this engine knows
    pub fn category_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry.iter().map(|c| c.name.to_string()).collect();
        names.sort();
        names
    }

    /// Categories to run: all of them, or the single one requested
    fn select(&self, category: Option<&str>) -> EngineResult<Vec<&'static Category>> {
        let selected: Vec<&'static Category> = match category.filter(|c| !c.is_empty()) {
            None => self.registry.iter().collect(),
            Some(name) => match self.registry.iter().find(|c| c.name == name) {
                Some(found) => vec![found],
                None => {
                    return Err(EngineError::UnknownCategory {
                        category: name.to_string(),
                        valid: self.category_names(),
                    })
                }
            },
        };

        if let Some(empty) = selected.iter().find(|c| c.checks.is_empty()) {
            return Err(EngineError::EmptyCategory(empty.name.to_string()));
        }
        Ok(selected)
    }

    /// Run checks against `root`, optionally restricted to one category
    pub fn run(&self, root: &Path, category: Option<&str>) -> EngineResult<ProjectResult> {
        let start = Instant::now();
        let root = resolve_root(root);
        let selected = self.select(category)?;
        for name in self.unknown_skips() {
            warn!("Skip list names unknown check '{}'", name);
        }

        let defs: Vec<&'static CheckDef> = selected
            .iter()
            .flat_map(|c| c.checks.iter())
            .filter(|d| !self.skipped.iter().any(|s| s == d.name))
            .collect();

        info!(
            "Running {} checks on {} workers against {}",
            defs.len(),
            self.workers,
            root.display()
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;

        let outcomes: Vec<Result<CheckResult, EngineError>> = pool.install(|| {
            defs.par_iter()
                .map(|def| run_single_check(def, &root))
                .collect()
        });

        let checks = outcomes.into_iter().collect::<EngineResult<Vec<_>>>()?;
        let result = ProjectResult::from_checks(root, checks);

        info!(
            "Checks complete: {}/{} passed, score {} ({}) in {:?}",
            result.passed_count(),
            result.checks().len(),
            result.score(),
            result.grade(),
            start.elapsed()
        );
        Ok(result)
    }
}

impl Default for CheckEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Run every registered check (or one category) with default settings
pub fn run(root: &Path, category: Option<&str>) -> EngineResult<ProjectResult> {
    CheckEngine::default().run(root, category)
}

/// Absolute, symlink-free path when it exists; absolute otherwise
fn resolve_root(root: &Path) -> PathBuf {
    root.canonicalize()
        .or_else(|_| std::path::absolute(root))
        .unwrap_or_else(|_| root.to_path_buf())
}

fn run_single_check(def: &CheckDef, root: &Path) -> EngineResult<CheckResult> {
    let start = Instant::now();
    debug!("Running check: {}", def.name);

    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| def.run(root))) {
        Ok(result) => {
            debug!(
                "Check {} {} in {:?}",
                def.name,
                if result.passed { "passed" } else { "failed" },
                start.elapsed()
            );
            Ok(result)
        }
        Err(panic_info) => {
            let message = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            error!("Check {} panicked: {}", def.name, message);
            Err(EngineError::CheckPanicked {
                name: def.name.to_string(),
                message,
            })
        }
    }
}
