//! Evaluate Application use case
//!
//! Submits the form's draft to a risk classifier and settles the form with
//! the outcome. One request per submission, no retries.

use crate::config::BehaviorConfig;
use crate::form::{LoanForm, SubmissionOutcome};
use crate::ports::prediction_logger::{NoPredictionLogger, PredictionEvent, PredictionLogger};
use crate::ports::progress::{NoProgress, SubmissionNotifier};
use crate::ports::risk_gateway::{GatewayError, HealthStatus, RiskGateway};
use loanrisk_domain::{ApplicantRecord, PredictionResult, ValidationIssue};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while evaluating an application
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluateError {
    #[error("Invalid application: {}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Use case for evaluating the current draft of a [`LoanForm`]
///
/// Flow:
/// 1. Validate the draft and move the form to `Pending`
/// 2. Send the snapshot to the [`RiskGateway`], bounded by the optional timeout
/// 3. Settle the form, notify progress and log the event
pub struct EvaluateApplicationUseCase {
    gateway: Arc<dyn RiskGateway>,
    prediction_logger: Arc<dyn PredictionLogger>,
    behavior: BehaviorConfig,
}

impl Clone for EvaluateApplicationUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            prediction_logger: self.prediction_logger.clone(),
            behavior: self.behavior.clone(),
        }
    }
}

impl EvaluateApplicationUseCase {
    pub fn new(gateway: Arc<dyn RiskGateway>) -> Self {
        Self {
            gateway,
            prediction_logger: Arc::new(NoPredictionLogger),
            behavior: BehaviorConfig::default(),
        }
    }

    /// Create with a prediction logger.
    pub fn with_prediction_logger(mut self, logger: Arc<dyn PredictionLogger>) -> Self {
        self.prediction_logger = logger;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn gateway_name(&self) -> &str {
        self.gateway.name()
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, form: &mut LoanForm) -> Result<PredictionResult, EvaluateError> {
        self.execute_with_progress(form, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        form: &mut LoanForm,
        progress: &dyn SubmissionNotifier,
    ) -> Result<PredictionResult, EvaluateError> {
        let ticket = form.begin_submission().map_err(|issues| {
            warn!("Rejected application with {} invalid field(s)", issues.len());
            EvaluateError::Validation(issues)
        })?;

        info!(
            "Submitting application #{} to {} classifier",
            ticket.generation(),
            self.gateway.name()
        );
        progress.on_pending(self.gateway.name());

        let result = self.request(ticket.record()).await;

        let outcome = match &result {
            Ok(prediction) => {
                if !prediction.is_consistent() {
                    warn!(
                        "Classifier labels ({}, {}) disagree with probability {}",
                        prediction.default_risk(),
                        prediction.recommendation(),
                        prediction.default_probability()
                    );
                }
                info!(
                    "Prediction: probability={} risk={} recommendation={}",
                    prediction.default_probability(),
                    prediction.default_risk(),
                    prediction.recommendation()
                );
                SubmissionOutcome::Prediction(*prediction)
            }
            Err(e) => {
                match e.status() {
                    Some(status) => warn!("Prediction failed (HTTP {}): {}", status, e),
                    None => warn!("Prediction failed: {}", e),
                }
                SubmissionOutcome::Failed(e.to_string())
            }
        };

        self.log_outcome(ticket.record(), &outcome);
        progress.on_settled(&outcome);
        form.settle(&ticket, outcome);

        result.map_err(EvaluateError::from)
    }

    /// Ask the gateway whether the classifier is reachable
    pub async fn check_health(&self) -> Result<HealthStatus, GatewayError> {
        debug!("Checking health of {} classifier", self.gateway.name());
        match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, self.gateway.health())
                .await
                .map_err(|_| GatewayError::Timeout)?,
            None => self.gateway.health().await,
        }
    }

    async fn request(&self, record: &ApplicantRecord) -> Result<PredictionResult, GatewayError> {
        match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, self.gateway.predict(record))
                .await
                .map_err(|_| GatewayError::Timeout)?,
            None => self.gateway.predict(record).await,
        }
    }

    fn log_outcome(&self, record: &ApplicantRecord, outcome: &SubmissionOutcome) {
        let event = match outcome {
            SubmissionOutcome::Prediction(prediction) => PredictionEvent::new(
                "prediction",
                serde_json::json!({
                    "gateway": self.gateway.name(),
                    "record": record,
                    "result": prediction,
                }),
            ),
            SubmissionOutcome::Failed(message) => PredictionEvent::new(
                "prediction_failed",
                serde_json::json!({
                    "gateway": self.gateway.name(),
                    "record": record,
                    "error": message,
                }),
            ),
        };
        self.prediction_logger.log(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;
    use async_trait::async_trait;
    use loanrisk_domain::{ApplicantField, Recommendation, RiskLevel, classify};
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Mocks ====================

    /// Mock gateway that classifies locally or returns a pre-configured error
    struct MockGateway {
        error: Option<GatewayError>,
        delay: Option<Duration>,
        received: Mutex<Vec<ApplicantRecord>>,
    }

    impl MockGateway {
        fn ok() -> Self {
            Self {
                error: None,
                delay: None,
                received: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: GatewayError) -> Self {
            Self {
                error: Some(error),
                ..Self::ok()
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::ok()
            }
        }
    }

    #[async_trait]
    impl RiskGateway for MockGateway {
        fn name(&self) -> &str {
            "mock"
        }

        async fn predict(
            &self,
            record: &ApplicantRecord,
        ) -> Result<PredictionResult, GatewayError> {
            self.received.lock().unwrap().push(record.clone());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(classify(record)),
            }
        }

        async fn health(&self) -> Result<HealthStatus, GatewayError> {
            Ok(HealthStatus::healthy("mock is running"))
        }
    }

    /// Tracking notifier that records the callbacks it receives
    #[derive(Default)]
    struct TrackingProgress {
        events: Mutex<Vec<String>>,
    }

    impl SubmissionNotifier for TrackingProgress {
        fn on_pending(&self, gateway: &str) {
            self.events.lock().unwrap().push(format!("pending:{}", gateway));
        }

        fn on_settled(&self, outcome: &SubmissionOutcome) {
            let label = match outcome {
                SubmissionOutcome::Prediction(_) => "settled:ok".to_string(),
                SubmissionOutcome::Failed(msg) => format!("settled:err:{}", msg),
            };
            self.events.lock().unwrap().push(label);
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl PredictionLogger for RecordingLogger {
        fn log(&self, event: PredictionEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_successful_evaluation_settles_form() {
        let gateway = Arc::new(MockGateway::ok());
        let use_case = EvaluateApplicationUseCase::new(gateway.clone());
        let mut form = LoanForm::new();
        form.set_field(ApplicantField::Fico, "721").unwrap();
        form.set_field(ApplicantField::Dti, "9.9").unwrap();
        form.set_field(ApplicantField::InterestRate, "0.099").unwrap();

        let result = use_case.execute(&mut form).await.unwrap();

        assert_eq!(result.default_probability(), 0.05);
        assert_eq!(result.default_risk(), RiskLevel::Low);
        assert_eq!(result.recommendation(), Recommendation::Approve);
        assert_eq!(
            form.state(),
            &FormState::Settled(SubmissionOutcome::Prediction(result))
        );
        assert_eq!(gateway.received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_server_error_surfaces_message_verbatim() {
        let gateway = Arc::new(MockGateway::failing(GatewayError::ServerError {
            status: 400,
            message: "bad request".to_string(),
        }));
        let use_case = EvaluateApplicationUseCase::new(gateway);
        let progress = TrackingProgress::default();
        let mut form = LoanForm::new();

        let err = use_case
            .execute_with_progress(&mut form, &progress)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "bad request");
        assert_eq!(form.outcome().and_then(|o| o.error()), Some("bad request"));
        assert!(form.outcome().and_then(|o| o.prediction()).is_none());
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["pending:mock".to_string(), "settled:err:bad request".to_string()]
        );
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_gateway() {
        let gateway = Arc::new(MockGateway::ok());
        let use_case = EvaluateApplicationUseCase::new(gateway.clone());
        let progress = TrackingProgress::default();
        let mut form = LoanForm::new();
        form.set_field(ApplicantField::PublicRecords, "9").unwrap();

        let err = use_case
            .execute_with_progress(&mut form, &progress)
            .await
            .unwrap_err();

        match err {
            EvaluateError::Validation(issues) => {
                assert_eq!(issues[0].field, ApplicantField::PublicRecords)
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(gateway.received.lock().unwrap().is_empty());
        assert!(progress.events.lock().unwrap().is_empty());
        assert_eq!(form.state(), &FormState::Editing);
    }

    #[tokio::test]
    async fn test_timeout_settles_with_error() {
        let gateway = Arc::new(MockGateway::slow(Duration::from_millis(200)));
        let use_case = EvaluateApplicationUseCase::new(gateway).with_behavior(BehaviorConfig {
            timeout: Some(Duration::from_millis(10)),
        });
        let mut form = LoanForm::new();

        let err = use_case.execute(&mut form).await.unwrap_err();

        assert_eq!(err, EvaluateError::Gateway(GatewayError::Timeout));
        assert_eq!(
            form.outcome().and_then(|o| o.error()),
            Some("Request timed out")
        );
    }

    #[tokio::test]
    async fn test_logs_each_settled_submission() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = EvaluateApplicationUseCase::new(Arc::new(MockGateway::ok()))
            .with_prediction_logger(logger.clone());
        let mut form = LoanForm::new();

        use_case.execute(&mut form).await.unwrap();

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        let (event_type, payload) = &events[0];
        assert_eq!(*event_type, "prediction");
        assert_eq!(payload["gateway"], "mock");
        assert_eq!(payload["record"]["fico"], 700);
        assert_eq!(payload["result"]["defaultRisk"], "Medium");
    }

    #[tokio::test]
    async fn test_logs_failures() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = EvaluateApplicationUseCase::new(Arc::new(MockGateway::failing(
            GatewayError::ConnectionError("refused".to_string()),
        )))
        .with_prediction_logger(logger.clone());
        let mut form = LoanForm::new();

        let _ = use_case.execute(&mut form).await;

        let events = logger.events.lock().unwrap();
        assert_eq!(events[0].0, "prediction_failed");
        assert_eq!(events[0].1["error"], "Connection error: refused");
    }

    #[tokio::test]
    async fn test_resubmit_after_error() {
        let use_case = EvaluateApplicationUseCase::new(Arc::new(MockGateway::ok()));
        let mut form = LoanForm::new();
        form.set_field(ApplicantField::Dti, "80").unwrap();
        assert!(use_case.execute(&mut form).await.is_err());

        form.set_field(ApplicantField::Dti, "40").unwrap();
        let result = use_case.execute(&mut form).await.unwrap();
        assert_eq!(result.default_probability(), 0.60);
    }

    #[tokio::test]
    async fn test_check_health() {
        let use_case = EvaluateApplicationUseCase::new(Arc::new(MockGateway::ok()));
        let status = use_case.check_health().await.unwrap();
        assert!(status.is_healthy());
    }
}
