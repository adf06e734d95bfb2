//! Configuration file loading for loanrisk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LOANRISK_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./loanrisk.toml` or `./.loanrisk.toml`
//! 4. Global config: `<config_dir>/loanrisk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ClassifierMode, ConfigIssue, DEFAULT_BASE_URL, FileClassifierConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, Severity,
};
pub use loader::ConfigLoader;
