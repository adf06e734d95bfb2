//! Heuristic default-risk classifier
//!
//! A fixed, ordered table of tiers over FICO score, debt-to-income ratio and
//! interest rate. The first tier whose three conditions all hold decides the
//! probability; when none matches the fallback probability applies.
//!
//! Every comparison is strict. A record sitting exactly on a threshold falls
//! through to the next tier.
//!
//! Only `fico`, `dti` and `interest_rate` are read. Purpose, installment,
//! income, credit-line age, revolving balance/utilization, inquiries,
//! delinquencies, public records and the credit-policy flag are accepted on
//! the record but have no influence on the outcome.

use super::result::PredictionResult;
use crate::applicant::record::ApplicantRecord;

/// One row of the tier table.
///
/// Matches when `fico > min_fico`, `dti < max_dti` and
/// `interest_rate < max_interest_rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskTier {
    pub min_fico: u16,
    pub max_dti: f64,
    pub max_interest_rate: f64,
    pub probability: f64,
}

impl RiskTier {
    pub fn matches(&self, record: &ApplicantRecord) -> bool {
        record.fico > self.min_fico
            && record.dti < self.max_dti
            && record.interest_rate < self.max_interest_rate
    }
}

/// Tiers in evaluation order
pub const RISK_TIERS: [RiskTier; 3] = [
    RiskTier {
        min_fico: 720,
        max_dti: 10.0,
        max_interest_rate: 0.10,
        probability: 0.05,
    },
    RiskTier {
        min_fico: 680,
        max_dti: 25.0,
        max_interest_rate: 0.15,
        probability: 0.15,
    },
    RiskTier {
        min_fico: 620,
        max_dti: 35.0,
        max_interest_rate: 0.20,
        probability: 0.30,
    },
];

/// Probability when no tier matches
pub const FALLBACK_PROBABILITY: f64 = 0.60;

/// Stateless classifier over [`RISK_TIERS`]
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Index into [`RISK_TIERS`] of the first matching tier
    pub fn matching_tier(&self, record: &ApplicantRecord) -> Option<usize> {
        RISK_TIERS.iter().position(|tier| tier.matches(record))
    }

    pub fn default_probability(&self, record: &ApplicantRecord) -> f64 {
        self.matching_tier(record)
            .map(|index| RISK_TIERS[index].probability)
            .unwrap_or(FALLBACK_PROBABILITY)
    }

    pub fn classify(&self, record: &ApplicantRecord) -> PredictionResult {
        PredictionResult::from_probability(self.default_probability(record))
    }
}

/// Classify a record with the heuristic tier table.
pub fn classify(record: &ApplicantRecord) -> PredictionResult {
    HeuristicClassifier.classify(record)
}
