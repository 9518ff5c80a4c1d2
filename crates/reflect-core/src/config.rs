//! Configuration types for reflect.
//!
//! [`Config::load`] layers, lowest to highest: the embedded defaults, an
//! optional `reflect.toml` in the working directory (or an explicit file,
//! which must exist), and `REFLECT_`-prefixed environment variables such as
//! `REFLECT_PATHS__LOG`. [`Config::defaults`] returns the embedded defaults
//! without touching the filesystem or environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
log       = "logs/test.jsonl"
report    = "reports/today.md"
checklist = "reports/issue_suggestions.md"

[report]
timestamp_format = "%Y-%m-%dT%H:%M:%S%.6f"
"#;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "reflect.toml";

const ENV_PREFIX: &str = "REFLECT";
const ENV_SEPARATOR: &str = "__";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[paths]` section: where the log is read and the artifacts are written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_log")]
    pub log: PathBuf,
    #[serde(default = "default_report")]
    pub report: PathBuf,
    #[serde(default = "default_checklist")]
    pub checklist: PathBuf,
}

fn default_log() -> PathBuf { PathBuf::from("logs/test.jsonl") }
fn default_report() -> PathBuf { PathBuf::from("reports/today.md") }
fn default_checklist() -> PathBuf { PathBuf::from("reports/issue_suggestions.md") }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            log: default_log(),
            report: default_report(),
            checklist: default_checklist(),
        }
    }
}

/// `[report]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportConfig {
    /// `chrono` strftime format for the report title timestamp.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_timestamp_format() -> String { "%Y-%m-%dT%H:%M:%S%.6f".to_string() }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. `file` names an explicit config file
    /// that must exist; without it `reflect.toml` is read if present.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        Self::build(file, environment())
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn build(file: Option<&Path>, env: config::Environment) -> anyhow::Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file_source)
            .add_source(env)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator(ENV_SEPARATOR)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
