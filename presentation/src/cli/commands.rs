//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for prediction results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON in the wire shape
    Json,
}

impl From<OutputFormat> for loanrisk_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => loanrisk_domain::OutputFormat::Text,
            OutputFormat::Json => loanrisk_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for loanrisk
#[derive(Parser, Debug)]
#[command(name = "loanrisk")]
#[command(author, version, about = "Predict the default risk of a loan application")]
#[command(long_about = r#"
loanrisk collects the attributes of a loan application and predicts its
default risk: a probability, a risk level (Low / Medium / High) and a
recommendation (Approve / Reject).

Fields start at the form defaults and can be changed with --set, loaded
from a JSON object with --input, or edited interactively with -i.

The prediction is computed locally by default. With --remote the
application is POSTed as JSON to <base-url>/api/predict instead.

Configuration files are loaded from (in priority order):
1. LOANRISK_<SECTION>__<KEY>   Environment variables
2. --config <path>             Explicit config file
3. ./loanrisk.toml             Project-level config
4. ~/.config/loanrisk/config.toml   Global config

Example:
  loanrisk --set fico=721 --set dti=9.9 --set interestRate=0.099
  loanrisk --input application.json --output json
  loanrisk --remote --base-url http://localhost:5000 --set purpose=car
  loanrisk -i
"#)]
pub struct Cli {
    /// Set a field, e.g. `--set fico=720` (can be specified multiple times)
    #[arg(short, long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// JSON file holding an object of field values
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Start the interactive form
    #[arg(short, long)]
    pub interactive: bool,

    /// Use the remote prediction service instead of the local heuristic
    #[arg(long)]
    pub remote: bool,

    /// Base URL of the prediction service
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Check that the classifier is reachable and exit
    #[arg(long)]
    pub health: bool,

    /// List the application fields with their accepted ranges and exit
    #[arg(long)]
    pub list_fields: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Append every prediction to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub prediction_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Parse `FIELD=VALUE`
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((field.to_string(), value.trim().to_string()))
}
