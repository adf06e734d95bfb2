//! Applicant field descriptors
//!
//! [`ApplicantField`] names every field of an
//! [`ApplicantRecord`](super::record::ApplicantRecord) and carries the
//! metadata the input layer needs: wire name, label, value kind and the
//! accepted range.

use crate::core::error::DomainError;

/// How a field's value is entered and stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 0 or 1
    Flag,
    /// One of [`LoanPurpose`](super::purpose::LoanPurpose)
    Purpose,
    /// Whole number
    Integer,
    /// Real number
    Decimal,
}

/// Accepted numeric range for a field.
///
/// The upper bound is always inclusive. The lower bound is inclusive unless
/// `min_exclusive` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: Option<f64>,
    pub min_exclusive: bool,
}

impl FieldRange {
    const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
            min_exclusive: false,
        }
    }

    /// Check whether a value falls within this range.
    ///
    /// Non-finite values are never in range.
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        let above_min = if self.min_exclusive {
            value > self.min
        } else {
            value >= self.min
        };
        above_min && self.max.is_none_or(|max| value <= max)
    }
}

impl std::fmt::Display for FieldRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => {
                let open = if self.min_exclusive { '(' } else { '[' };
                write!(f, "{}{}, {}]", open, self.min, max)
            }
            None if self.min_exclusive => write!(f, "> {}", self.min),
            None => write!(f, ">= {}", self.min),
        }
    }
}

/// A single field of the applicant record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicantField {
    CreditPolicy,
    Purpose,
    InterestRate,
    Installment,
    LogAnnualIncome,
    Dti,
    Fico,
    DaysWithCreditLine,
    RevolBal,
    RevolUtil,
    InquiriesLast6Months,
    Delinquencies2Years,
    PublicRecords,
}

impl ApplicantField {
    /// All fields, in form order
    pub const ALL: [ApplicantField; 13] = [
        ApplicantField::CreditPolicy,
        ApplicantField::Purpose,
        ApplicantField::InterestRate,
        ApplicantField::Installment,
        ApplicantField::LogAnnualIncome,
        ApplicantField::Dti,
        ApplicantField::Fico,
        ApplicantField::DaysWithCreditLine,
        ApplicantField::RevolBal,
        ApplicantField::RevolUtil,
        ApplicantField::InquiriesLast6Months,
        ApplicantField::Delinquencies2Years,
        ApplicantField::PublicRecords,
    ];

    /// Wire (JSON) name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicantField::CreditPolicy => "creditPolicy",
            ApplicantField::Purpose => "purpose",
            ApplicantField::InterestRate => "interestRate",
            ApplicantField::Installment => "installment",
            ApplicantField::LogAnnualIncome => "logAnnualIncome",
            ApplicantField::Dti => "dti",
            ApplicantField::Fico => "fico",
            ApplicantField::DaysWithCreditLine => "daysWithCreditLine",
            ApplicantField::RevolBal => "revolBal",
            ApplicantField::RevolUtil => "revolUtil",
            ApplicantField::InquiriesLast6Months => "inquiriesLast6Months",
            ApplicantField::Delinquencies2Years => "delinquencies2Years",
            ApplicantField::PublicRecords => "publicRecords",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicantField::CreditPolicy => "Credit Policy",
            ApplicantField::Purpose => "Purpose",
            ApplicantField::InterestRate => "Interest Rate",
            ApplicantField::Installment => "Monthly Installment ($)",
            ApplicantField::LogAnnualIncome => "Log Annual Income",
            ApplicantField::Dti => "Debt-to-Income Ratio (%)",
            ApplicantField::Fico => "FICO Score",
            ApplicantField::DaysWithCreditLine => "Days with Credit Line",
            ApplicantField::RevolBal => "Revolving Balance ($)",
            ApplicantField::RevolUtil => "Revolving Utilization (%)",
            ApplicantField::InquiriesLast6Months => "Inquiries (Last 6 Months)",
            ApplicantField::Delinquencies2Years => "Delinquencies (2 Years)",
            ApplicantField::PublicRecords => "Public Records",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            ApplicantField::CreditPolicy => FieldKind::Flag,
            ApplicantField::Purpose => FieldKind::Purpose,
            ApplicantField::Fico
            | ApplicantField::DaysWithCreditLine
            | ApplicantField::InquiriesLast6Months
            | ApplicantField::Delinquencies2Years
            | ApplicantField::PublicRecords => FieldKind::Integer,
            ApplicantField::InterestRate
            | ApplicantField::Installment
            | ApplicantField::LogAnnualIncome
            | ApplicantField::Dti
            | ApplicantField::RevolBal
            | ApplicantField::RevolUtil => FieldKind::Decimal,
        }
    }

    /// Accepted range, or `None` for fields without a numeric value
    pub fn range(&self) -> Option<FieldRange> {
        let range = match self {
            ApplicantField::Purpose => return None,
            ApplicantField::CreditPolicy => FieldRange::closed(0.0, 1.0),
            ApplicantField::InterestRate => FieldRange {
                min: 0.0,
                max: Some(0.35),
                min_exclusive: true,
            },
            ApplicantField::Installment => FieldRange::closed(50.0, 2000.0),
            ApplicantField::LogAnnualIncome => FieldRange::closed(9.0, 15.0),
            ApplicantField::Dti => FieldRange::closed(0.0, 50.0),
            ApplicantField::Fico => FieldRange::closed(300.0, 850.0),
            ApplicantField::DaysWithCreditLine => FieldRange::closed(0.0, 10000.0),
            ApplicantField::RevolBal => FieldRange {
                min: 0.0,
                max: None,
                min_exclusive: false,
            },
            ApplicantField::RevolUtil => FieldRange::closed(0.0, 100.0),
            ApplicantField::InquiriesLast6Months => FieldRange::closed(0.0, 10.0),
            ApplicantField::Delinquencies2Years => FieldRange::closed(0.0, 10.0),
            ApplicantField::PublicRecords => FieldRange::closed(0.0, 5.0),
        };
        Some(range)
    }
}

impl std::fmt::Display for ApplicantField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApplicantField {
    type Err = DomainError;

    /// Accepts the wire name case-insensitively, with or without `_`/`-`
    /// separators (`interestRate`, `interest_rate`, `INTEREST-RATE`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squash = |name: &str| -> String {
            name.chars()
                .filter(|c| *c != '_' && *c != '-')
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = squash(s.trim());
        ApplicantField::ALL
            .into_iter()
            .find(|field| squash(field.as_str()) == wanted)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}
