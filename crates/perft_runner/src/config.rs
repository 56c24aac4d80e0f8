//! Runner configuration loaded from TOML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Read when `--config` is not given and the file exists in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "chess-perft.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Depth for `perft`/`divide` when none is given on the command line
    pub default_depth: u8,
    /// Suite depths whose expected count is above this are skipped
    pub node_limit: u64,
    /// Print reports as JSON instead of text
    pub json: bool,
    /// EPD files run by `suite` with no argument
    pub suites: Vec<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_depth: 4,
            node_limit: 10_000_000,
            json: false,
            suites: Vec::new(),
        }
    }
}

impl RunnerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid runner configuration")?;
        if config.default_depth == 0 {
            bail!("default_depth must be at least 1");
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// An explicit path must exist; the default path is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
