//! Visual severity tiers for risk levels

use colored::{ColoredString, Colorize};
use loanrisk_domain::RiskLevel;

/// Display tier for a result. Carries no logic beyond choosing a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Success,
    Warning,
    Error,
}

impl SeverityTier {
    pub fn for_risk(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::Low => SeverityTier::Success,
            RiskLevel::Medium => SeverityTier::Warning,
            RiskLevel::High => SeverityTier::Error,
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            SeverityTier::Success => text.green(),
            SeverityTier::Warning => text.yellow(),
            SeverityTier::Error => text.red(),
        }
    }
}
