//! Classifier configuration from TOML (`[classifier]` section)

use serde::{Deserialize, Serialize};

/// Default base URL of the remote prediction service
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Where predictions are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierMode {
    /// In-process heuristic (default)
    #[default]
    Local,
    /// HTTP prediction service
    Remote,
}

/// Raw classifier configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    pub mode: ClassifierMode,
    /// Base URL of the prediction service (remote mode)
    pub base_url: String,
    /// Request timeout in seconds; none by default
    pub timeout_seconds: Option<u64>,
    /// Artificial delay before a local prediction returns
    pub simulated_latency_ms: u64,
}

impl Default for FileClassifierConfig {
    fn default() -> Self {
        Self {
            mode: ClassifierMode::Local,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            simulated_latency_ms: 0,
        }
    }
}
