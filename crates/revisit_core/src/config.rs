//! Review tool configuration.
//!
//! # Responsibility
//! - Define the on-disk configuration shape and its defaults.
//! - Load an existing config file or create one with defaults on first run.
//!
//! # Invariants
//! - A missing config file is not an error; defaults are written and used.
//! - `schedule_days` must not be empty; an empty schedule would silently
//!   make every note invisible forever.

use crate::schedule::{ReviewSchedule, DUE_INTERVALS};
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration load/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Malformed { path: PathBuf, source: serde_json::Error },
    EmptySchedule,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access config `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "malformed config `{}`: {source}", path.display())
            }
            Self::EmptySchedule => write!(f, "schedule_days must not be empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::EmptySchedule => None,
        }
    }
}

/// On-disk configuration for the review tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Root of the per-subject note vault.
    pub root_dir: PathBuf,
    /// Directory export documents are written into.
    pub export_dir: PathBuf,
    /// Day offsets at which notes become due.
    pub schedule_days: Vec<i64>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("./answers"),
            export_dir: PathBuf::from("./answers"),
            schedule_days: DUE_INTERVALS.to_vec(),
        }
    }
}

impl ReviewConfig {
    /// Builds the membership set from the configured day offsets.
    pub fn schedule(&self) -> ReviewSchedule {
        ReviewSchedule::from_days(self.schedule_days.iter().copied())
    }

    /// Rejects configurations that cannot drive a review pass.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.schedule_days.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }
        Ok(())
    }
}

/// Loads the config file, writing defaults first when it does not exist.
///
/// # Errors
/// - `Io` when the file exists but cannot be read, or defaults cannot be
///   written on first run.
/// - `Malformed` when the file exists but is not valid config JSON.
/// - `EmptySchedule` when the loaded schedule has no entries.
pub fn load_or_init(path: impl AsRef<Path>) -> ConfigResult<ReviewConfig> {
    let path = path.as_ref();
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let config = ReviewConfig::default();
            let rendered = serde_json::to_string_pretty(&config).map_err(|source| {
                ConfigError::Malformed {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            std::fs::write(path, rendered).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            info!(
                "event=config_init module=config status=ok path={}",
                path.display()
            );
            return Ok(config);
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: ReviewConfig =
        serde_json::from_str(&text).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;

    info!(
        "event=config_load module=config status=ok path={} schedule_days={}",
        path.display(),
        config.schedule_days.len()
    );
    Ok(config)
}
