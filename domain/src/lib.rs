//! Domain layer for loanrisk
//!
//! This crate contains the applicant record, the prediction result and the
//! heuristic risk classifier. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **ApplicantRecord**: the thirteen attributes of a loan application,
//!   each described by an [`ApplicantField`] with its accepted range
//! - **HeuristicClassifier**: ordered threshold tiers over FICO score,
//!   debt-to-income ratio and interest rate
//! - **PredictionResult**: default probability plus the risk level and
//!   recommendation derived from it
//!
//! ```
//! use loanrisk_domain::{ApplicantRecord, RiskLevel, classify};
//!
//! let record = ApplicantRecord { fico: 721, dti: 9.9, interest_rate: 0.099, ..Default::default() };
//! let result = classify(&record);
//! assert_eq!(result.default_probability(), 0.05);
//! assert_eq!(result.default_risk(), RiskLevel::Low);
//! ```

pub mod applicant;
pub mod config;
pub mod core;
pub mod prediction;

// Re-export commonly used types
pub use applicant::{
    field::{ApplicantField, FieldKind, FieldRange},
    purpose::LoanPurpose,
    record::ApplicantRecord,
    validation::ValidationIssue,
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use prediction::{
    classifier::{FALLBACK_PROBABILITY, HeuristicClassifier, RISK_TIERS, RiskTier, classify},
    result::PredictionResult,
    risk::{HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD, Recommendation, RiskLevel},
};
