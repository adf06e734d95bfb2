//! Loan application form state.
//!
//! [`LoanForm`] owns the draft [`ApplicantRecord`] and tracks which of the
//! three UI states the form is in:
//!
//! ```text
//!   Editing ──begin_submission──▶ Pending ──settle──▶ Settled
//!      ▲                                                 │
//!      └───────────────────── edit ──────────────────────┘
//! ```
//!
//! Each submission receives a [`SubmissionTicket`] holding a snapshot of the
//! draft. Starting another submission supersedes any outstanding ticket:
//! settling a stale ticket leaves the form untouched.

use loanrisk_domain::{
    ApplicantField, ApplicantRecord, DomainError, PredictionResult, ValidationIssue,
};
use tracing::debug;

/// How a submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Prediction(PredictionResult),
    /// User-visible error message
    Failed(String),
}

impl SubmissionOutcome {
    pub fn prediction(&self) -> Option<&PredictionResult> {
        match self {
            SubmissionOutcome::Prediction(result) => Some(result),
            SubmissionOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Prediction(_) => None,
            SubmissionOutcome::Failed(message) => Some(message),
        }
    }
}

/// The three mutually exclusive form states
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    /// Idle, accepting edits
    #[default]
    Editing,
    /// A request is in flight
    Pending,
    /// A result or error is on display
    Settled(SubmissionOutcome),
}

/// Handle for one in-flight submission
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    generation: u64,
    record: ApplicantRecord,
}

impl SubmissionTicket {
    /// Snapshot of the draft taken when the submission started
    pub fn record(&self) -> &ApplicantRecord {
        &self.record
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The form collecting one applicant record
#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    draft: ApplicantRecord,
    state: FormState,
    generation: u64,
}

impl LoanForm {
    /// Create a form pre-filled with the default draft
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ApplicantRecord {
        &self.draft
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, FormState::Pending)
    }

    /// Outcome currently on display, if settled
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        match &self.state {
            FormState::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Edit a single field from user-entered text.
    ///
    /// On error the draft is unchanged.
    pub fn set_field(&mut self, field: ApplicantField, raw: &str) -> Result<(), DomainError> {
        self.draft.set_field(field, raw)?;
        self.after_edit();
        Ok(())
    }

    /// Edit a field addressed by its name (`fico`, `interestRate`, ...).
    pub fn set_named_field(&mut self, name: &str, raw: &str) -> Result<(), DomainError> {
        let field: ApplicantField = name.parse()?;
        self.set_field(field, raw)
    }

    /// Apply a JSON object of field edits.
    ///
    /// Either every key is applied or, on the first bad key or value, none
    /// are. Returns the number of fields written.
    pub fn apply_json(
        &mut self,
        edits: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<usize, DomainError> {
        let mut staged = self.draft.clone();
        for (name, value) in edits {
            let field: ApplicantField = name.parse()?;
            staged.set_json_value(field, value)?;
        }
        self.draft = staged;
        self.after_edit();
        Ok(edits.len())
    }

    /// Restore the default draft and return to editing
    pub fn reset(&mut self) {
        self.draft = ApplicantRecord::default();
        self.state = FormState::Editing;
    }

    /// Validate the draft and move to `Pending`.
    ///
    /// On validation failure the form goes back to `Editing` and every
    /// violation is returned.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, Vec<ValidationIssue>> {
        let issues = self.draft.validate();
        if !issues.is_empty() {
            self.state = FormState::Editing;
            return Err(issues);
        }

        self.generation += 1;
        self.state = FormState::Pending;
        Ok(SubmissionTicket {
            generation: self.generation,
            record: self.draft.clone(),
        })
    }

    /// Record the outcome of a submission.
    ///
    /// Returns `false` (and changes nothing) if the ticket was superseded by
    /// a later submission or the form is no longer pending.
    pub fn settle(&mut self, ticket: &SubmissionTicket, outcome: SubmissionOutcome) -> bool {
        if ticket.generation != self.generation || !self.is_pending() {
            debug!(
                "Ignoring outcome of superseded submission #{} (current #{})",
                ticket.generation, self.generation
            );
            return false;
        }
        self.state = FormState::Settled(outcome);
        true
    }

    fn after_edit(&mut self) {
        if matches!(self.state, FormState::Settled(_)) {
            self.state = FormState::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prediction(p: f64) -> SubmissionOutcome {
        SubmissionOutcome::Prediction(PredictionResult::from_probability(p))
    }

    #[test]
    fn test_new_form_is_editing_with_default_draft() {
        let form = LoanForm::new();
        assert_eq!(form.state(), &FormState::Editing);
        assert_eq!(form.draft(), &ApplicantRecord::default());
    }

    #[test]
    fn test_set_named_field_updates_one_field() {
        let mut form = LoanForm::new();
        form.set_named_field("dti", "9.5").unwrap();
        assert_eq!(form.draft().dti, 9.5);
        assert_eq!(form.draft().fico, 700);
    }

    #[test]
    fn test_set_named_field_unknown() {
        let mut form = LoanForm::new();
        let err = form.set_named_field("salary", "1").unwrap_err();
        assert_eq!(err, DomainError::UnknownField("salary".to_string()));
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut form = LoanForm::new();
        let ticket = form.begin_submission().unwrap();
        assert!(form.is_pending());
        assert_eq!(ticket.record(), form.draft());

        assert!(form.settle(&ticket, prediction(0.15)));
        assert_eq!(form.outcome(), Some(&prediction(0.15)));

        // Editing a settled form returns it to Editing.
        form.set_field(ApplicantField::Fico, "690").unwrap();
        assert_eq!(form.state(), &FormState::Editing);
    }

    #[test]
    fn test_failed_edit_keeps_settled_state() {
        let mut form = LoanForm::new();
        let ticket = form.begin_submission().unwrap();
        form.settle(&ticket, SubmissionOutcome::Failed("boom".to_string()));

        assert!(form.set_field(ApplicantField::Fico, "abc").is_err());
        assert_eq!(form.outcome().and_then(|o| o.error()), Some("boom"));
    }

    #[test]
    fn test_validation_failure_stays_editing() {
        let mut form = LoanForm::new();
        form.set_field(ApplicantField::Fico, "900").unwrap();

        let issues = form.begin_submission().unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, ApplicantField::Fico);
        assert_eq!(form.state(), &FormState::Editing);
    }

    #[test]
    fn test_edit_while_pending_does_not_touch_ticket() {
        let mut form = LoanForm::new();
        let ticket = form.begin_submission().unwrap();
        form.set_field(ApplicantField::Fico, "800").unwrap();

        assert!(form.is_pending());
        assert_eq!(ticket.record().fico, 700);
        assert_eq!(form.draft().fico, 800);
    }

    #[test]
    fn test_newer_submission_supersedes_older() {
        let mut form = LoanForm::new();
        let first = form.begin_submission().unwrap();
        let second = form.begin_submission().unwrap();
        assert!(second.generation() > first.generation());

        assert!(!form.settle(&first, prediction(0.60)));
        assert!(form.is_pending());

        assert!(form.settle(&second, prediction(0.15)));
        assert_eq!(form.outcome(), Some(&prediction(0.15)));

        // A late answer for the old ticket cannot overwrite the display.
        assert!(!form.settle(&first, prediction(0.60)));
        assert_eq!(form.outcome(), Some(&prediction(0.15)));
    }

    #[test]
    fn test_apply_json_is_all_or_nothing() {
        let mut form = LoanForm::new();
        let edits = json!({"fico": 750, "dti": "hello"});
        assert!(form.apply_json(edits.as_object().unwrap()).is_err());
        assert_eq!(form.draft().fico, 700);

        let edits = json!({"fico": 750, "purpose": "car", "creditPolicy": 0});
        assert_eq!(form.apply_json(edits.as_object().unwrap()).unwrap(), 3);
        assert_eq!(form.draft().fico, 750);
        assert!(!form.draft().credit_policy);
    }

    #[test]
    fn test_reset() {
        let mut form = LoanForm::new();
        form.set_field(ApplicantField::Fico, "800").unwrap();
        let ticket = form.begin_submission().unwrap();
        form.settle(&ticket, prediction(0.05));

        form.reset();
        assert_eq!(form.draft(), &ApplicantRecord::default());
        assert_eq!(form.state(), &FormState::Editing);
    }
}
