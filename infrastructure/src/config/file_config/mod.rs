//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod classifier;
mod logging;
mod output;

pub use classifier::{ClassifierMode, DEFAULT_BASE_URL, FileClassifierConfig};
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The setting cannot work at all.
    Error,
    /// The setting works but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key of the offending setting (e.g. `classifier.base_url`)
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Classifier selection and transport settings
    pub classifier: FileClassifierConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues never abort loading; callers decide whether to warn or stop.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base_url = self.classifier.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "classifier.base_url",
                message: format!("'{}' must start with http:// or https://", base_url),
            });
        }

        if self.classifier.timeout_seconds == Some(0) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "classifier.timeout_seconds",
                message: "0 would time out every request; ignoring".to_string(),
            });
        }

        if self.classifier.mode == ClassifierMode::Remote && self.classifier.simulated_latency_ms > 0
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "classifier.simulated_latency_ms",
                message: "only applies to the local classifier".to_string(),
            });
        }

        issues
    }

    /// Layer command-line classifier settings over the loaded values so
    /// [`validate`](Self::validate) sees what will actually be used.
    pub fn apply_classifier_overrides(
        &mut self,
        remote: bool,
        base_url: Option<&str>,
        timeout_seconds: Option<u64>,
    ) {
        if remote {
            self.classifier.mode = ClassifierMode::Remote;
        }
        if let Some(url) = base_url {
            self.classifier.base_url = url.to_string();
        }
        if timeout_seconds.is_some() {
            self.classifier.timeout_seconds = timeout_seconds;
        }
    }

    /// Request timeout in seconds, ignoring a configured 0
    pub fn effective_timeout_seconds(&self) -> Option<u64> {
        self.classifier.timeout_seconds.filter(|secs| *secs > 0)
    }
}
