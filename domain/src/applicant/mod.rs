//! Applicant subdomain: the record collected by the form and its fields.

pub mod field;
pub mod purpose;
pub mod record;
pub mod validation;
