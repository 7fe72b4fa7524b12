use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::report::terminal::DEFAULT_COLUMN_WIDTH;

pub const CONFIG_FILE_NAME: &str = ".misra-summary.toml";

/// misra-summary configuration (loaded from .misra-summary.toml)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colorize the report
    #[serde(default = "default_color")]
    pub color: bool,

    /// Width the "File <name>" column is padded to
    #[serde(default = "default_column_width")]
    pub column_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            color: default_color(),
            column_width: default_column_width(),
        }
    }
}

fn default_color() -> bool {
    true
}

fn default_column_width() -> usize {
    DEFAULT_COLUMN_WIDTH
}

impl SummaryConfig {
    /// Try to load .misra-summary.toml next to the report or in its parents.
    ///
    /// A broken config is logged and ignored.
    pub fn load(report_path: &Path) -> Option<Self> {
        let start = report_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let start = std::fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

        let config_path = find_config_file(&start)?;
        debug!("Found config: {}", config_path.display());

        match Self::from_file(&config_path) {
            Ok(config) => {
                info!("Loaded config from {}", config_path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Ignoring {}: {:#}", config_path.display(), e);
                None
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("could not parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Walk up from `start` to find .misra-summary.toml
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(CONFIG_FILE_NAME);
        if config.is_file() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}
