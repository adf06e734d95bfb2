//! Applicant record entity

use super::field::{ApplicantField, FieldKind};
use super::purpose::LoanPurpose;
use super::validation::ValidationIssue;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The attributes of a single loan application.
///
/// Serializes with the camelCase wire names (`interestRate`, `revolBal`, ...)
/// and sends `creditPolicy` as the number `0` or `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRecord {
    /// Whether the applicant meets the lender's credit underwriting policy
    #[serde(with = "credit_policy_flag")]
    pub credit_policy: bool,
    pub purpose: LoanPurpose,
    /// Interest rate as a fraction (0.12 = 12%)
    pub interest_rate: f64,
    /// Monthly installment in dollars
    pub installment: f64,
    /// Natural log of self-reported annual income
    pub log_annual_income: f64,
    /// Debt-to-income ratio, percent
    pub dti: f64,
    pub fico: u16,
    pub days_with_credit_line: u32,
    pub revol_bal: f64,
    /// Revolving line utilization, percent
    pub revol_util: f64,
    pub inquiries_last_6_months: u8,
    pub delinquencies_2_years: u8,
    pub public_records: u8,
}

impl Default for ApplicantRecord {
    fn default() -> Self {
        Self {
            credit_policy: true,
            purpose: LoanPurpose::DebtConsolidation,
            interest_rate: 0.12,
            installment: 500.0,
            log_annual_income: 11.0,
            dti: 15.0,
            fico: 700,
            days_with_credit_line: 3000,
            revol_bal: 25000.0,
            revol_util: 50.0,
            inquiries_last_6_months: 0,
            delinquencies_2_years: 0,
            public_records: 0,
        }
    }
}

impl ApplicantRecord {
    /// Replace a single field from user-entered text, leaving every other
    /// field untouched.
    ///
    /// Only the value's syntax is checked here; range checks happen in
    /// [`validate`](Self::validate).
    pub fn set_field(&mut self, field: ApplicantField, raw: &str) -> Result<(), DomainError> {
        let name = field.as_str();
        match field {
            ApplicantField::CreditPolicy => self.credit_policy = parse_flag(name, raw)?,
            ApplicantField::Purpose => self.purpose = raw.parse()?,
            ApplicantField::InterestRate => self.interest_rate = parse_decimal(name, raw)?,
            ApplicantField::Installment => self.installment = parse_decimal(name, raw)?,
            ApplicantField::LogAnnualIncome => self.log_annual_income = parse_decimal(name, raw)?,
            ApplicantField::Dti => self.dti = parse_decimal(name, raw)?,
            ApplicantField::Fico => self.fico = parse_integer(name, raw)?,
            ApplicantField::DaysWithCreditLine => {
                self.days_with_credit_line = parse_integer(name, raw)?
            }
            ApplicantField::RevolBal => self.revol_bal = parse_decimal(name, raw)?,
            ApplicantField::RevolUtil => self.revol_util = parse_decimal(name, raw)?,
            ApplicantField::InquiriesLast6Months => {
                self.inquiries_last_6_months = parse_integer(name, raw)?
            }
            ApplicantField::Delinquencies2Years => {
                self.delinquencies_2_years = parse_integer(name, raw)?
            }
            ApplicantField::PublicRecords => self.public_records = parse_integer(name, raw)?,
        }
        Ok(())
    }

    /// Replace a single field from a JSON value (number, string or bool).
    pub fn set_json_value(
        &mut self,
        field: ApplicantField,
        value: &serde_json::Value,
    ) -> Result<(), DomainError> {
        let raw = match value {
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Bool(b) if field.kind() == FieldKind::Flag => b.to_string(),
            other => {
                return Err(DomainError::invalid_value(
                    field.as_str(),
                    other.to_string(),
                    "expected a number or string",
                ));
            }
        };
        self.set_field(field, &raw)
    }

    /// Numeric value of a field, or `None` for [`ApplicantField::Purpose`]
    pub fn numeric_value(&self, field: ApplicantField) -> Option<f64> {
        let value = match field {
            ApplicantField::Purpose => return None,
            ApplicantField::CreditPolicy => {
                if self.credit_policy {
                    1.0
                } else {
                    0.0
                }
            }
            ApplicantField::InterestRate => self.interest_rate,
            ApplicantField::Installment => self.installment,
            ApplicantField::LogAnnualIncome => self.log_annual_income,
            ApplicantField::Dti => self.dti,
            ApplicantField::Fico => f64::from(self.fico),
            ApplicantField::DaysWithCreditLine => f64::from(self.days_with_credit_line),
            ApplicantField::RevolBal => self.revol_bal,
            ApplicantField::RevolUtil => self.revol_util,
            ApplicantField::InquiriesLast6Months => f64::from(self.inquiries_last_6_months),
            ApplicantField::Delinquencies2Years => f64::from(self.delinquencies_2_years),
            ApplicantField::PublicRecords => f64::from(self.public_records),
        };
        Some(value)
    }

    /// Display text for a field's current value
    pub fn display_value(&self, field: ApplicantField) -> String {
        match field {
            ApplicantField::Purpose => self.purpose.to_string(),
            ApplicantField::CreditPolicy => u8::from(self.credit_policy).to_string(),
            _ => self
                .numeric_value(field)
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }

    /// Check every field against its accepted range.
    ///
    /// Returns all violations; an empty list means the record may be
    /// classified.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        ApplicantField::ALL
            .into_iter()
            .filter_map(|field| {
                let range = field.range()?;
                let value = self.numeric_value(field)?;
                if range.contains(value) {
                    None
                } else {
                    Some(ValidationIssue::out_of_range(field, value, range))
                }
            })
            .collect()
    }
}

fn parse_flag(field: &'static str, raw: &str) -> Result<bool, DomainError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "1.0" | "true" | "yes" => Ok(true),
        "0" | "0.0" | "false" | "no" => Ok(false),
        _ => Err(DomainError::invalid_value(field, raw, "expected 0 or 1")),
    }
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, DomainError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_value(field, raw, "expected a number"))?;
    if !value.is_finite() {
        return Err(DomainError::invalid_value(field, raw, "expected a finite number"));
    }
    Ok(value)
}

fn parse_integer<T: TryFrom<i64>>(field: &'static str, raw: &str) -> Result<T, DomainError> {
    let value = parse_decimal(field, raw)?;
    if value.fract() != 0.0 {
        return Err(DomainError::invalid_value(field, raw, "expected a whole number"));
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return Err(DomainError::invalid_value(field, raw, "number too large"));
    }
    T::try_from(value as i64)
        .map_err(|_| DomainError::invalid_value(field, raw, "number out of representable range"))
}

/// Serde adapter: `creditPolicy` travels as `0`/`1`.
mod credit_policy_flag {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlagRepr {
        Bool(bool),
        Int(i64),
        Float(f64),
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match FlagRepr::deserialize(deserializer)? {
            FlagRepr::Bool(b) => Ok(b),
            FlagRepr::Int(0) => Ok(false),
            FlagRepr::Int(1) => Ok(true),
            FlagRepr::Float(f) if f == 0.0 => Ok(false),
            FlagRepr::Float(f) if f == 1.0 => Ok(true),
            FlagRepr::Int(n) => Err(D::Error::custom(format!(
                "creditPolicy must be 0 or 1, got {n}"
            ))),
            FlagRepr::Float(f) => Err(D::Error::custom(format!(
                "creditPolicy must be 0 or 1, got {f}"
            ))),
        }
    }
}
