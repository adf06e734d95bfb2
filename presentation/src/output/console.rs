//! Console output formatter for predictions

use super::severity::SeverityTier;
use colored::Colorize;
use loanrisk_application::{FormState, HealthStatus, SubmissionOutcome};
use loanrisk_domain::{
    ApplicantField, ApplicantRecord, FieldKind, LoanPurpose, PredictionResult, ValidationIssue,
};

/// Formats predictions, drafts and errors for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a prediction as a short colored summary
    pub fn format(result: &PredictionResult) -> String {
        let tier = SeverityTier::for_risk(result.default_risk());
        let mut output = String::new();

        output.push_str(&Self::header("Prediction Results"));
        output.push('\n');
        output.push_str(&format!(
            "{:<22}{}\n",
            "Default Probability:".cyan().bold(),
            tier.paint(&Self::percentage(result.default_probability())).bold()
        ));
        output.push_str(&format!(
            "{:<22}{}\n",
            "Risk Level:".cyan().bold(),
            tier.paint(result.default_risk().as_str())
        ));
        output.push_str(&format!(
            "{:<22}{}\n",
            "Recommendation:".cyan().bold(),
            tier.paint(result.recommendation().as_str()).bold()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON in the wire shape
    pub fn format_json(result: &PredictionResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a failed submission
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// Format a failed submission as JSON (`{"error": "..."}`)
    pub fn format_error_json(message: &str) -> String {
        serde_json::to_string_pretty(&serde_json::json!({ "error": message }))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the fields that failed validation
    pub fn format_validation(issues: &[ValidationIssue]) -> String {
        let mut output = format!("{}\n", "Invalid application:".red().bold());
        for issue in issues {
            output.push_str(&format!(
                "  {} {} ({}): {}\n",
                "x".red(),
                issue.field.label(),
                issue.field,
                issue.message
            ));
        }
        output
    }

    /// Format the current draft, one field per line
    pub fn format_draft(record: &ApplicantRecord) -> String {
        let mut output = Self::section_header("Loan Application");
        for field in ApplicantField::ALL {
            output.push_str(&format!(
                "  {:<34} {:<22} {}\n",
                field.label(),
                field.as_str().dimmed(),
                record.display_value(field)
            ));
        }
        output
    }

    /// Format the field reference shown by `--list-fields` and `/fields`
    pub fn format_fields() -> String {
        let mut output = Self::section_header("Application Fields");
        for field in ApplicantField::ALL {
            let accepted = match (field.kind(), field.range()) {
                (FieldKind::Flag, _) => "0 or 1".to_string(),
                (FieldKind::Purpose, _) => "one of the purposes below".to_string(),
                (FieldKind::Integer, Some(range)) => format!("integer {}", range),
                (FieldKind::Decimal, Some(range)) => format!("decimal {}", range),
                (_, None) => "any".to_string(),
            };
            output.push_str(&format!(
                "  {:<22} {:<34} {}\n",
                field.as_str().bold(),
                field.label(),
                accepted.dimmed()
            ));
        }

        output.push_str(&format!("\n{}\n", "Purposes:".cyan().bold()));
        for purpose in LoanPurpose::ALL {
            output.push_str(&format!("  {:<20} {}\n", purpose.as_str(), purpose.label()));
        }
        output
    }

    /// Format a health check answer
    pub fn format_health(gateway: &str, status: &HealthStatus) -> String {
        let mark = if status.is_healthy() {
            "v".green()
        } else {
            "x".red()
        };
        if status.message.is_empty() {
            format!("{} {} classifier: {}", mark, gateway, status.status)
        } else {
            format!(
                "{} {} classifier: {} ({})",
                mark, gateway, status.status, status.message
            )
        }
    }

    /// Format whatever the form currently shows
    pub fn format_state(state: &FormState) -> String {
        match state {
            FormState::Editing => format!("{}", "Editing".dimmed()),
            FormState::Pending => format!("{}", "Predicting...".yellow()),
            FormState::Settled(outcome) => Self::format_outcome(outcome),
        }
    }

    /// Format a settled submission
    pub fn format_outcome(outcome: &SubmissionOutcome) -> String {
        match outcome {
            SubmissionOutcome::Prediction(result) => Self::format(result),
            SubmissionOutcome::Failed(message) => Self::format_error(message),
        }
    }

    /// Probability as a percentage with two decimals (`0.15` -> `15.00%`)
    pub fn percentage(probability: f64) -> String {
        format!("{:.2}%", probability * 100.0)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(40).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(ConsoleFormatter::percentage(0.15), "15.00%");
        assert_eq!(ConsoleFormatter::percentage(0.05), "5.00%");
        assert_eq!(ConsoleFormatter::percentage(0.6), "60.00%");
        assert_eq!(ConsoleFormatter::percentage(0.0), "0.00%");
        assert_eq!(ConsoleFormatter::percentage(1.0), "100.00%");
    }

    #[test]
    fn test_format_contains_all_labels() {
        plain();
        let output = ConsoleFormatter::format(&PredictionResult::from_probability(0.30));
        assert!(output.contains("30.00%"));
        assert!(output.contains("High"));
        assert!(output.contains("Reject"));
    }

    #[test]
    fn test_format_json_wire_shape() {
        let json = ConsoleFormatter::format_json(&PredictionResult::from_probability(0.15));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["defaultProbability"], 0.15);
        assert_eq!(value["defaultRisk"], "Medium");
        assert_eq!(value["recommendation"], "Approve");
    }

    #[test]
    fn test_format_error_json() {
        let json = ConsoleFormatter::format_error_json("bad request");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["error"], "bad request");
    }

    #[test]
    fn test_format_error_is_verbatim() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_error("Request timed out"),
            "Error: Request timed out"
        );
    }

    #[test]
    fn test_format_validation_lists_every_issue() {
        plain();
        let record = ApplicantRecord {
            fico: 900,
            dti: 55.0,
            ..ApplicantRecord::default()
        };
        let output = ConsoleFormatter::format_validation(&record.validate());
        assert!(output.contains("fico"));
        assert!(output.contains("dti"));

        // The upper bound of dti is inclusive
        let boundary = ApplicantRecord {
            dti: 50.0,
            ..ApplicantRecord::default()
        };
        assert!(boundary.validate().is_empty());
    }

    #[test]
    fn test_format_draft_shows_every_field() {
        plain();
        let output = ConsoleFormatter::format_draft(&ApplicantRecord::default());
        for field in ApplicantField::ALL {
            assert!(output.contains(field.as_str()), "missing {}", field);
        }
    }

    #[test]
    fn test_format_fields_lists_purposes() {
        plain();
        let output = ConsoleFormatter::format_fields();
        for purpose in LoanPurpose::ALL {
            assert!(output.contains(purpose.as_str()));
        }
    }

    #[test]
    fn test_format_health() {
        plain();
        let output = ConsoleFormatter::format_health("local", &HealthStatus::healthy("ready"));
        assert_eq!(output, "v local classifier: healthy (ready)");
    }

    #[test]
    fn test_format_outcome() {
        plain();
        let failed = SubmissionOutcome::Failed("boom".to_string());
        assert_eq!(ConsoleFormatter::format_outcome(&failed), "Error: boom");
        assert!(ConsoleFormatter::format_state(&FormState::Pending).contains("Predicting"));
    }
}
