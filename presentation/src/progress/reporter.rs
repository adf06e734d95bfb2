//! Progress reporting for submissions

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use loanrisk_application::{SubmissionNotifier, SubmissionOutcome};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner on stderr while a prediction is pending
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionNotifier for SpinnerProgress {
    fn on_pending(&self, gateway: &str) {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Predicting");
        pb.set_message(format!("({} classifier)", gateway));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_settled(&self, outcome: &SubmissionOutcome) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        match outcome {
            SubmissionOutcome::Prediction(_) => pb.finish_and_clear(),
            SubmissionOutcome::Failed(_) => {
                pb.abandon_with_message(format!("{}", "failed".red()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loanrisk_domain::PredictionResult;

    #[test]
    fn test_spinner_lifecycle() {
        let progress = SpinnerProgress::new();
        progress.on_pending("local");
        assert!(progress.spinner.lock().unwrap().is_some());

        progress.on_settled(&SubmissionOutcome::Prediction(
            PredictionResult::from_probability(0.05),
        ));
        assert!(progress.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_settle_without_pending_is_noop() {
        let progress = SpinnerProgress::new();
        progress.on_settled(&SubmissionOutcome::Failed("boom".to_string()));
        assert!(progress.spinner.lock().unwrap().is_none());
    }
}
