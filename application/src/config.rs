//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the request timeout for classifier calls.

use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like the timeout for a single
/// prediction request. No timeout is applied by default.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a prediction before giving up.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        assert!(BehaviorConfig::default().timeout.is_none());
    }

    #[test]
    fn test_from_timeout_seconds() {
        assert_eq!(
            BehaviorConfig::from_timeout_seconds(Some(5)).timeout,
            Some(Duration::from_secs(5))
        );
        assert!(BehaviorConfig::from_timeout_seconds(None).timeout.is_none());
    }
}
