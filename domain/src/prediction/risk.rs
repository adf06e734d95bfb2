//! Risk level and recommendation value objects
//!
//! Both are derived from a default probability, never chosen on their own:
//!
//! | probability | risk   | recommendation |
//! |-------------|--------|----------------|
//! | > 0.25      | High   | Reject         |
//! | > 0.10      | Medium | Approve        |
//! | otherwise   | Low    | Approve        |

use serde::{Deserialize, Serialize};

/// Probability above which a loan is high risk and rejected
pub const HIGH_RISK_THRESHOLD: f64 = 0.25;

/// Probability above which a loan is at least medium risk
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.10;

/// Default-risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if probability > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lending decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Approve,
    Reject,
}

impl Recommendation {
    pub fn from_probability(probability: f64) -> Self {
        if probability > HIGH_RISK_THRESHOLD {
            Recommendation::Reject
        } else {
            Recommendation::Approve
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Approve => "Approve",
            Recommendation::Reject => "Reject",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
