//! Application layer for loanrisk
//!
//! This crate contains the form state, use cases, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod form;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use form::{FormState, LoanForm, SubmissionOutcome, SubmissionTicket};
pub use ports::{
    prediction_logger::{NoPredictionLogger, PredictionEvent, PredictionLogger},
    progress::{NoProgress, SubmissionNotifier},
    risk_gateway::{GatewayError, HealthStatus, RiskGateway},
};
pub use use_cases::evaluate_application::{EvaluateApplicationUseCase, EvaluateError};
