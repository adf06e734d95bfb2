//! Loan purpose value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// What the borrower intends to use the loan for.
///
/// Closed set of categories. The wire representation is the snake_case
/// name (e.g. `"debt_consolidation"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoanPurpose {
    #[default]
    DebtConsolidation,
    CreditCard,
    AllOther,
    HomeImprovement,
    SmallBusiness,
    MajorPurchase,
    Educational,
    Medical,
    Vacation,
    Moving,
    House,
    Wedding,
    Car,
    RenewableEnergy,
}

impl LoanPurpose {
    /// Every purpose, in the order the form offers them.
    pub const ALL: [LoanPurpose; 14] = [
        LoanPurpose::DebtConsolidation,
        LoanPurpose::CreditCard,
        LoanPurpose::AllOther,
        LoanPurpose::HomeImprovement,
        LoanPurpose::SmallBusiness,
        LoanPurpose::MajorPurchase,
        LoanPurpose::Educational,
        LoanPurpose::Medical,
        LoanPurpose::Vacation,
        LoanPurpose::Moving,
        LoanPurpose::House,
        LoanPurpose::Wedding,
        LoanPurpose::Car,
        LoanPurpose::RenewableEnergy,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanPurpose::DebtConsolidation => "debt_consolidation",
            LoanPurpose::CreditCard => "credit_card",
            LoanPurpose::AllOther => "all_other",
            LoanPurpose::HomeImprovement => "home_improvement",
            LoanPurpose::SmallBusiness => "small_business",
            LoanPurpose::MajorPurchase => "major_purchase",
            LoanPurpose::Educational => "educational",
            LoanPurpose::Medical => "medical",
            LoanPurpose::Vacation => "vacation",
            LoanPurpose::Moving => "moving",
            LoanPurpose::House => "house",
            LoanPurpose::Wedding => "wedding",
            LoanPurpose::Car => "car",
            LoanPurpose::RenewableEnergy => "renewable_energy",
        }
    }

    /// Human-readable label, e.g. "Debt Consolidation"
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for LoanPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LoanPurpose {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        LoanPurpose::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownPurpose(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_purposes_are_distinct() {
        let names: std::collections::HashSet<_> =
            LoanPurpose::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn test_parse_accepts_separators_and_case() {
        assert_eq!(
            "Home Improvement".parse::<LoanPurpose>().ok(),
            Some(LoanPurpose::HomeImprovement)
        );
        assert_eq!(
            "small-business".parse::<LoanPurpose>().ok(),
            Some(LoanPurpose::SmallBusiness)
        );
        assert_eq!("car".parse::<LoanPurpose>().ok(), Some(LoanPurpose::Car));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "yacht".parse::<LoanPurpose>().unwrap_err();
        assert_eq!(err, DomainError::UnknownPurpose("yacht".to_string()));
    }

    #[test]
    fn test_label() {
        assert_eq!(LoanPurpose::RenewableEnergy.label(), "Renewable Energy");
        assert_eq!(LoanPurpose::Car.label(), "Car");
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&LoanPurpose::MajorPurchase).unwrap();
        assert_eq!(json, "\"major_purchase\"");
        let purpose: LoanPurpose = serde_json::from_str("\"all_other\"").unwrap();
        assert_eq!(purpose, LoanPurpose::AllOther);
    }
}
