//! In-process classifier gateway

use async_trait::async_trait;
use loanrisk_application::{GatewayError, HealthStatus, RiskGateway};
use loanrisk_domain::{ApplicantRecord, HeuristicClassifier, PredictionResult, RISK_TIERS};
use std::time::Duration;
use tracing::debug;

/// Runs the [`HeuristicClassifier`] in-process.
///
/// An optional simulated latency delays each prediction, which keeps the
/// pending state visible in interactive use.
#[derive(Debug, Clone, Default)]
pub struct LocalRiskGateway {
    classifier: HeuristicClassifier,
    latency: Option<Duration>,
}

impl LocalRiskGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.latency = (!latency.is_zero()).then_some(latency);
        self
    }
}

#[async_trait]
impl RiskGateway for LocalRiskGateway {
    fn name(&self) -> &str {
        "local"
    }

    async fn predict(&self, record: &ApplicantRecord) -> Result<PredictionResult, GatewayError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match self.classifier.matching_tier(record) {
            Some(index) => debug!(
                "Matched tier {} (fico > {}, dti < {}, rate < {})",
                index + 1,
                RISK_TIERS[index].min_fico,
                RISK_TIERS[index].max_dti,
                RISK_TIERS[index].max_interest_rate
            ),
            None => debug!("No tier matched; using fallback probability"),
        }

        Ok(self.classifier.classify(record))
    }

    async fn health(&self) -> Result<HealthStatus, GatewayError> {
        Ok(HealthStatus::healthy("Local heuristic classifier is available"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loanrisk_domain::{Recommendation, RiskLevel};

    #[tokio::test]
    async fn test_predict_matches_classifier() {
        let gateway = LocalRiskGateway::new();
        let record = ApplicantRecord {
            fico: 600,
            dti: 40.0,
            interest_rate: 0.25,
            ..ApplicantRecord::default()
        };

        let result = gateway.predict(&record).await.unwrap();
        assert_eq!(result.default_probability(), 0.60);
        assert_eq!(result.default_risk(), RiskLevel::High);
        assert_eq!(result.recommendation(), Recommendation::Reject);
    }

    #[tokio::test]
    async fn test_simulated_latency() {
        let gateway = LocalRiskGateway::new().with_simulated_latency(Duration::from_millis(30));
        let started = std::time::Instant::now();

        gateway.predict(&ApplicantRecord::default()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_zero_latency_is_disabled() {
        let gateway = LocalRiskGateway::new().with_simulated_latency(Duration::ZERO);
        assert!(gateway.latency.is_none());
    }

    #[tokio::test]
    async fn test_health_is_always_healthy() {
        let status = LocalRiskGateway::new().health().await.unwrap();
        assert!(status.is_healthy());
    }
}
