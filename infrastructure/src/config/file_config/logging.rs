//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL audit log of every settled submission
    pub prediction_log: Option<PathBuf>,
    /// Write diagnostic (tracing) output to this file instead of stderr
    pub log_file: Option<PathBuf>,
}
