//! Prediction result value object

use super::risk::{Recommendation, RiskLevel};
use crate::core::error::DomainError;
use serde::Serialize;

/// Outcome of classifying one applicant record.
///
/// Locally produced results come from [`PredictionResult::from_probability`],
/// which derives the risk level and recommendation from the probability.
/// Results decoded from a remote service keep the labels they were sent
/// with; [`is_consistent`](Self::is_consistent) tells whether those labels
/// agree with the local thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    default_probability: f64,
    default_risk: RiskLevel,
    recommendation: Recommendation,
}

impl PredictionResult {
    /// Build a result whose labels follow from `probability`.
    ///
    /// # Panics
    /// Panics if `probability` is outside `0.0..=1.0`
    pub fn from_probability(probability: f64) -> Self {
        Self::try_from_probability(probability).expect("probability must be within 0..=1")
    }

    pub fn try_from_probability(probability: f64) -> Result<Self, DomainError> {
        check_probability(probability)?;
        Ok(Self {
            default_probability: probability,
            default_risk: RiskLevel::from_probability(probability),
            recommendation: Recommendation::from_probability(probability),
        })
    }

    /// Rebuild a result received from a remote service, keeping its labels.
    pub fn from_remote(
        probability: f64,
        default_risk: RiskLevel,
        recommendation: Recommendation,
    ) -> Result<Self, DomainError> {
        check_probability(probability)?;
        Ok(Self {
            default_probability: probability,
            default_risk,
            recommendation,
        })
    }

    pub fn default_probability(&self) -> f64 {
        self.default_probability
    }

    pub fn default_risk(&self) -> RiskLevel {
        self.default_risk
    }

    pub fn recommendation(&self) -> Recommendation {
        self.recommendation
    }

    /// Whether the labels match what the probability implies
    pub fn is_consistent(&self) -> bool {
        self.default_risk == RiskLevel::from_probability(self.default_probability)
            && self.recommendation == Recommendation::from_probability(self.default_probability)
    }
}

fn check_probability(probability: f64) -> Result<(), DomainError> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(DomainError::InvalidProbability(probability))
    }
}
