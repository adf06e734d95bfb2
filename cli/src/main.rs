//! CLI entrypoint for loanrisk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use loanrisk_application::{
    BehaviorConfig, EvaluateApplicationUseCase, EvaluateError, LoanForm, NoProgress,
    RiskGateway, SubmissionNotifier,
};
use loanrisk_domain::OutputFormat;
use loanrisk_infrastructure::{
    ClassifierMode, ConfigLoader, FileConfig, HttpRiskGateway, JsonlPredictionLogger,
    LocalRiskGateway, Severity,
};
use loanrisk_presentation::{Cli, ConsoleFormatter, FormRepl, SpinnerProgress};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = load_config(&cli)?;
    config.apply_classifier_overrides(cli.remote, cli.base_url.as_deref(), cli.timeout);

    let _log_guard = init_logging(cli.verbose, config.logging.log_file.as_deref());
    info!("Starting loanrisk");

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => bail!("Invalid configuration: {}", issue),
            Severity::Warning => warn!("Configuration: {}", issue),
        }
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    if cli.list_fields {
        println!("{}", ConsoleFormatter::format_fields());
        return Ok(());
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let behavior = BehaviorConfig::from_timeout_seconds(config.effective_timeout_seconds());

    let gateway: Arc<dyn RiskGateway> = if config.classifier.mode == ClassifierMode::Remote {
        let base_url = config.classifier.base_url.clone();
        info!("Using remote classifier at {}", base_url);
        Arc::new(HttpRiskGateway::new(base_url, behavior.timeout)?)
    } else {
        Arc::new(
            LocalRiskGateway::new().with_simulated_latency(Duration::from_millis(
                config.classifier.simulated_latency_ms,
            )),
        )
    };

    let mut use_case = EvaluateApplicationUseCase::new(gateway).with_behavior(behavior);

    let prediction_log = cli
        .prediction_log
        .clone()
        .or_else(|| config.logging.prediction_log.clone());
    if let Some(path) = prediction_log {
        match JsonlPredictionLogger::open(&path) {
            Some(logger) => {
                info!("Logging predictions to {}", logger.path().display());
                use_case = use_case.with_prediction_logger(Arc::new(logger));
            }
            None => warn!("Prediction logging disabled"),
        }
    }

    // Health check mode
    if cli.health {
        let status = use_case
            .check_health()
            .await
            .context("Health check failed")?;
        println!(
            "{}",
            ConsoleFormatter::format_health(use_case.gateway_name(), &status)
        );
        if !status.is_healthy() {
            bail!("Classifier reported status '{}'", status.status);
        }
        return Ok(());
    }

    // === Application form ===
    let mut form = LoanForm::new();

    if let Some(path) = &cli.input {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        let edits = value
            .as_object()
            .ok_or_else(|| anyhow!("{} must contain a JSON object", path.display()))?;
        let applied = form
            .apply_json(edits)
            .with_context(|| format!("Invalid application in {}", path.display()))?;
        info!("Loaded {} field(s) from {}", applied, path.display());
    }

    for (field, value) in &cli.set {
        form.set_named_field(field, value)
            .with_context(|| format!("--set {}={}", field, value))?;
    }

    // Interactive mode
    if cli.interactive {
        let mut repl = FormRepl::new(use_case, form)
            .with_progress(!cli.quiet)
            .with_format(format);
        repl.run().await?;
        return Ok(());
    }

    // Single submission
    let spinner;
    let progress: &dyn SubmissionNotifier = if cli.quiet {
        &NoProgress
    } else {
        spinner = SpinnerProgress::new();
        &spinner
    };

    match use_case.execute_with_progress(&mut form, progress).await {
        Ok(prediction) => {
            match format {
                OutputFormat::Text => println!("{}", ConsoleFormatter::format(&prediction)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&prediction)),
            }
            Ok(())
        }
        Err(EvaluateError::Validation(issues)) => {
            eprintln!("{}", ConsoleFormatter::format_validation(&issues));
            bail!("{} field(s) out of range", issues.len())
        }
        Err(e) => {
            if format == OutputFormat::Json {
                println!("{}", ConsoleFormatter::format_error_json(&e.to_string()));
            }
            Err(e.into())
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr unless `log_file` is set. The returned guard must be
/// held until exit so buffered file output is flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let appender = log_file.map(|path| {
        let directory = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "loanrisk.log".to_string());
        RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name)
            .build(directory)
            .map_err(|e| (path.to_path_buf(), e))
    });

    match appender {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        fallback => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            if let Some(Err((path, e))) = fallback {
                warn!("Could not open log file {}: {}", path.display(), e);
            }
            None
        }
    }
}
