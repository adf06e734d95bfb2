//! Range validation results for applicant records

use super::field::{ApplicantField, FieldRange};

/// A single field whose value lies outside its accepted range
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub field: ApplicantField,
    pub message: String,
}

impl ValidationIssue {
    pub fn out_of_range(field: ApplicantField, value: f64, range: FieldRange) -> Self {
        Self {
            field,
            message: format!("{} is outside {}", value, range),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
