//! REPL for filling in and submitting a loan application

use crate::{ConsoleFormatter, SpinnerProgress};
use loanrisk_application::{EvaluateApplicationUseCase, EvaluateError, LoanForm, SubmissionNotifier};
use loanrisk_domain::OutputFormat;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `field=value`
    Set { field: String, value: String },
    Show,
    Submit,
    Reset,
    Fields,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse one line of input. Never fails; unrecognized input becomes
/// [`ReplCommand::Unknown`].
pub fn parse_command(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }

    if line.starts_with('/') {
        return match line {
            "/show" | "/s" => ReplCommand::Show,
            "/submit" | "/predict" | "/p" => ReplCommand::Submit,
            "/reset" => ReplCommand::Reset,
            "/fields" | "/f" => ReplCommand::Fields,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        };
    }

    match line.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => ReplCommand::Set {
            field: field.trim().to_string(),
            value: value.trim().to_string(),
        },
        _ => ReplCommand::Unknown(line.to_string()),
    }
}

/// Interactive application form
pub struct FormRepl {
    use_case: EvaluateApplicationUseCase,
    form: LoanForm,
    format: OutputFormat,
    show_progress: bool,
}

impl FormRepl {
    /// Create a new FormRepl starting from `form`
    pub fn new(use_case: EvaluateApplicationUseCase, form: LoanForm) -> Self {
        Self {
            use_case,
            form,
            format: OutputFormat::Text,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set the format used for results
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn form(&self) -> &LoanForm {
        &self.form
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("loanrisk").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("loan> ") {
                Ok(line) => {
                    let command = parse_command(&line);
                    if !matches!(command, ReplCommand::Empty) {
                        let _ = rl.add_history_entry(line.trim());
                    }
                    if self.handle(command).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Apply a command. Returns true if the REPL should exit.
    async fn handle(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Empty => {}
            ReplCommand::Set { field, value } => {
                match self.form.set_named_field(&field, &value) {
                    Ok(()) => println!("  {} = {}", field, value),
                    Err(e) => {
                        debug!("Rejected edit {}={:?}: {}", field, value, e);
                        eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()))
                    }
                }
            }
            ReplCommand::Show => {
                println!("{}", ConsoleFormatter::format_draft(self.form.draft()));
                println!("{}", ConsoleFormatter::format_state(self.form.state()));
            }
            ReplCommand::Submit => self.submit().await,
            ReplCommand::Reset => {
                self.form.reset();
                println!("Form reset to defaults.");
            }
            ReplCommand::Fields => println!("{}", ConsoleFormatter::format_fields()),
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Unknown(input) => {
                println!("Unknown command: {}", input);
                println!("Type /help for available commands");
            }
        }
        false
    }

    /// The notifier for a submission, or `None` when progress is hidden
    fn notifier<'a>(&self, spinner: &'a SpinnerProgress) -> Option<&'a dyn SubmissionNotifier> {
        self.show_progress.then_some(spinner as &dyn SubmissionNotifier)
    }

    async fn submit(&mut self) {
        let spinner = SpinnerProgress::new();
        let result = match self.notifier(&spinner) {
            Some(progress) => {
                self.use_case
                    .execute_with_progress(&mut self.form, progress)
                    .await
            }
            None => self.use_case.execute(&mut self.form).await,
        };

        match (result, self.format) {
            (Ok(prediction), OutputFormat::Text) => {
                println!("{}", ConsoleFormatter::format(&prediction))
            }
            (Ok(prediction), OutputFormat::Json) => {
                println!("{}", ConsoleFormatter::format_json(&prediction))
            }
            (Err(EvaluateError::Validation(issues)), _) => {
                eprintln!("{}", ConsoleFormatter::format_validation(&issues))
            }
            (Err(e), OutputFormat::Text) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()))
            }
            (Err(e), OutputFormat::Json) => {
                println!("{}", ConsoleFormatter::format_error_json(&e.to_string()))
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Loan Default Risk - Application       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Classifier: {}", self.use_case.gateway_name());
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  field=value       - Set a field (e.g. fico=720, purpose=credit_card)");
        println!("  /show, /s         - Show the application and its last result");
        println!("  /submit, /p       - Predict the default risk");
        println!("  /reset            - Restore the default application");
        println!("  /fields, /f       - List fields and accepted ranges");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loanrisk_application::{
        FormState, GatewayError, HealthStatus, RiskGateway, SubmissionOutcome,
    };
    use loanrisk_domain::{ApplicantRecord, PredictionResult, classify};
    use std::sync::Arc;

    struct ClassifyingGateway;

    #[async_trait::async_trait]
    impl RiskGateway for ClassifyingGateway {
        fn name(&self) -> &str {
            "mock"
        }

        async fn predict(
            &self,
            record: &ApplicantRecord,
        ) -> Result<PredictionResult, GatewayError> {
            Ok(classify(record))
        }

        async fn health(&self) -> Result<HealthStatus, GatewayError> {
            Ok(HealthStatus::healthy("ok"))
        }
    }

    fn repl() -> FormRepl {
        let use_case = EvaluateApplicationUseCase::new(Arc::new(ClassifyingGateway));
        FormRepl::new(use_case, LoanForm::new()).with_progress(false)
    }

    #[test]
    fn test_quiet_repl_has_no_notifier() {
        let spinner = SpinnerProgress::new();
        assert!(repl().notifier(&spinner).is_none());
        assert!(repl().with_progress(true).notifier(&spinner).is_some());
    }

    #[test]
    fn test_parse_assignments() {
        assert_eq!(
            parse_command("fico=720"),
            ReplCommand::Set {
                field: "fico".to_string(),
                value: "720".to_string()
            }
        );
        assert_eq!(
            parse_command("  purpose = small_business "),
            ReplCommand::Set {
                field: "purpose".to_string(),
                value: "small_business".to_string()
            }
        );
        // Empty value is passed through so the field parser can reject it
        assert_eq!(
            parse_command("dti="),
            ReplCommand::Set {
                field: "dti".to_string(),
                value: String::new()
            }
        );
    }

    #[test]
    fn test_parse_slash_commands() {
        assert_eq!(parse_command("/submit"), ReplCommand::Submit);
        assert_eq!(parse_command("/p"), ReplCommand::Submit);
        assert_eq!(parse_command("/show"), ReplCommand::Show);
        assert_eq!(parse_command("/reset"), ReplCommand::Reset);
        assert_eq!(parse_command("/fields"), ReplCommand::Fields);
        assert_eq!(parse_command("/?"), ReplCommand::Help);
        assert_eq!(parse_command("/exit"), ReplCommand::Quit);
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(parse_command(""), ReplCommand::Empty);
        assert_eq!(parse_command("   "), ReplCommand::Empty);
        assert_eq!(
            parse_command("/launch"),
            ReplCommand::Unknown("/launch".to_string())
        );
        assert_eq!(parse_command("fico"), ReplCommand::Unknown("fico".to_string()));
        assert_eq!(parse_command("=5"), ReplCommand::Unknown("=5".to_string()));
    }

    #[tokio::test]
    async fn test_edit_then_submit_settles_form() {
        let mut repl = repl();

        assert!(!repl.handle(parse_command("fico=721")).await);
        repl.handle(parse_command("dti=9.9")).await;
        repl.handle(parse_command("interestRate=0.099")).await;
        repl.handle(ReplCommand::Submit).await;

        let outcome = repl.form().outcome().unwrap();
        assert_eq!(outcome.prediction().unwrap().default_probability(), 0.05);
    }

    #[tokio::test]
    async fn test_invalid_submit_stays_editing() {
        let mut repl = repl();
        repl.handle(parse_command("fico=900")).await;
        repl.handle(ReplCommand::Submit).await;

        assert_eq!(repl.form().state(), &FormState::Editing);
    }

    #[tokio::test]
    async fn test_bad_value_leaves_draft_unchanged() {
        let mut repl = repl();
        repl.handle(parse_command("fico=abc")).await;
        assert_eq!(repl.form().draft().fico, 700);
    }

    #[tokio::test]
    async fn test_reset_and_quit() {
        let mut repl = repl();
        repl.handle(parse_command("fico=600")).await;
        repl.handle(ReplCommand::Submit).await;
        assert!(matches!(
            repl.form().outcome(),
            Some(SubmissionOutcome::Prediction(_))
        ));

        repl.handle(ReplCommand::Reset).await;
        assert_eq!(repl.form().draft(), &ApplicantRecord::default());
        assert_eq!(repl.form().state(), &FormState::Editing);

        assert!(repl.handle(ReplCommand::Quit).await);
    }
}
