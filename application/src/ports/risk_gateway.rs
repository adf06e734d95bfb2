//! Risk gateway port
//!
//! Defines how the application reaches a risk classifier, whether it runs
//! in-process or behind an HTTP endpoint.

use async_trait::async_trait;
use loanrisk_domain::{ApplicantRecord, PredictionResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during a prediction request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The service answered with a non-success status. The message is the
    /// service's own and is displayed as-is.
    #[error("{message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timed out")]
    Timeout,
}

impl GatewayError {
    /// HTTP status of a server error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Health report of a classifier service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            message: message.into(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Gateway to a risk classifier
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait RiskGateway: Send + Sync {
    /// Short name used in logs and progress output (e.g. "local", "remote")
    fn name(&self) -> &str;

    /// Classify a complete, validated record
    async fn predict(&self, record: &ApplicantRecord) -> Result<PredictionResult, GatewayError>;

    /// Check that the classifier is reachable
    async fn health(&self) -> Result<HealthStatus, GatewayError>;
}
