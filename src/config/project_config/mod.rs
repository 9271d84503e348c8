//! Project-level configuration support
//!
//! Loads per-project configuration from `goldcheck.toml` in the audited root.
//!
//! # Configuration Format
//!
//! ```toml
//! # goldcheck.toml
//!
//! [defaults]
//! format = "json"
//! verbose = false
//! workers = 4
//! fail_under = 90
//! no_color = true
//!
//! [checks]
//! skip = ["changelog.no_manual"]
//! ```
//!
//! Every key is optional. A value given on the command line always wins over
//! the file.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "goldcheck.toml";

/// Contents written by `goldcheck init`
pub const EXAMPLE_CONFIG: &str = r#"# goldcheck project configuration
#
# Values here act as defaults; command-line flags override them.

[defaults]
# Output format: text, json or agent
# format = "text"

# List every check, not only failures
# verbose = false

# Worker threads (0 = auto)
# workers = 0

# Minimum score for a zero exit status
# fail_under = 100

# Disable ANSI colors in text output
# no_color = false

[checks]
# Checks that do not apply to this project
# skip = ["changelog.no_manual"]
skip = []
"#;

/// Project-level configuration loaded from goldcheck.toml
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,

    /// Check selection
    #[serde(default)]
    pub checks: ChecksConfig,
}

/// Default CLI flags from config
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliDefaults {
    /// Default output format (text, json, agent)
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub verbose: Option<bool>,

    /// Default number of workers
    #[serde(default)]
    pub workers: Option<usize>,

    /// Minimum passing score
    #[serde(default)]
    pub fail_under: Option<u32>,

    #[serde(default)]
    pub no_color: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChecksConfig {
    /// Check names left out of every run
    #[serde(default)]
    pub skip: Vec<String>,
}

/// Load project configuration from the project root
///
/// Returns defaults when the file is absent or cannot be parsed.
pub fn load_project_config(repo_path: &Path) -> ProjectConfig {
    let toml_path = repo_path.join(CONFIG_FILE_NAME);
    if !toml_path.exists() {
        debug!("No project config found, using defaults");
        return ProjectConfig::default();
    }

    match load_toml_config(&toml_path) {
        Ok(config) => {
            debug!("Loaded project config from {}", toml_path.display());
            config
        }
        Err(e) => {
            warn!("Failed to load {}: {}", toml_path.display(), e);
            ProjectConfig::default()
        }
    }
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    if let Some(threshold) = config.defaults.fail_under {
        anyhow::ensure!(
            threshold <= 100,
            "fail_under must be between 0 and 100, got {}",
            threshold
        );
    }
    if let Some(workers) = config.defaults.workers {
        anyhow::ensure!(
            workers <= 64,
            "workers must be between 0 (auto) and 64, got {}",
            workers
        );
    }
    Ok(config)
}
