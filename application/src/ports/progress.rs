//! Submission progress port
//!
//! Lets the presentation layer show the pending and settled states of a
//! submission.

use crate::form::SubmissionOutcome;

/// Callback for progress updates during a submission
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait SubmissionNotifier: Send + Sync {
    /// Called when a request is handed to the gateway
    fn on_pending(&self, gateway: &str);

    /// Called once the submission has a result or an error
    fn on_settled(&self, outcome: &SubmissionOutcome);
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionNotifier for NoProgress {
    fn on_pending(&self, _gateway: &str) {}
    fn on_settled(&self, _outcome: &SubmissionOutcome) {}
}
