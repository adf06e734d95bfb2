//! HTTP classifier gateway
//!
//! Talks to a prediction service over JSON:
//!
//! - `POST {base_url}/api/predict` with the applicant record as the body.
//!   A 2xx answer carries `defaultProbability`, `defaultRisk` and
//!   `recommendation`; anything else carries `{"error": "..."}`.
//! - `GET {base_url}/api/health` returns `{"status", "message"}`.

use async_trait::async_trait;
use loanrisk_application::{GatewayError, HealthStatus, RiskGateway};
use loanrisk_domain::{ApplicantRecord, PredictionResult, Recommendation, RiskLevel};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const PREDICT_PATH: &str = "/api/predict";
pub const HEALTH_PATH: &str = "/api/health";

/// Shown when a failed response carries no usable `error` message
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to make prediction";

const USER_AGENT: &str = concat!("loanrisk/", env!("CARGO_PKG_VERSION"));

/// Success body of `POST /api/predict`. Extra fields (e.g. `success`) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictResponse {
    default_probability: f64,
    default_risk: RiskLevel,
    recommendation: Recommendation,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Gateway to a remote prediction service
#[derive(Debug, Clone)]
pub struct HttpRiskGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRiskGateway {
    /// Create a gateway for `base_url` (e.g. `http://localhost:5000`).
    ///
    /// `timeout` bounds each request end to end; `None` leaves requests
    /// unbounded.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl RiskGateway for HttpRiskGateway {
    fn name(&self) -> &str {
        "remote"
    }

    async fn predict(&self, record: &ApplicantRecord) -> Result<PredictionResult, GatewayError> {
        let url = self.endpoint(PREDICT_PATH);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        debug!("POST {} -> {} ({} bytes)", url, status, body.len());

        decode_prediction(status, &body)
    }

    async fn health(&self) -> Result<HealthStatus, GatewayError> {
        let url = self.endpoint(HEALTH_PATH);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;

        if !(200..300).contains(&status) {
            return Err(GatewayError::ServerError {
                status,
                message: error_message(&body, &format!("Health check failed (HTTP {})", status)),
            });
        }

        serde_json::from_slice(&body)
            .map_err(|e| GatewayError::InvalidResponse(format!("health response: {}", e)))
    }
}

fn transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(error.to_string())
    }
}

/// Turn a `/api/predict` response into a prediction or an error.
pub fn decode_prediction(status: u16, body: &[u8]) -> Result<PredictionResult, GatewayError> {
    if !(200..300).contains(&status) {
        return Err(GatewayError::ServerError {
            status,
            message: error_message(body, FALLBACK_ERROR_MESSAGE),
        });
    }

    let response: PredictResponse = serde_json::from_slice(body)
        .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

    PredictionResult::from_remote(
        response.default_probability,
        response.default_risk,
        response.recommendation,
    )
    .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}

/// The `error` string of a failure body, or `fallback`
fn error_message(body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
