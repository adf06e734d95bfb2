//! Infrastructure layer for loanrisk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gateway;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ClassifierMode, ConfigIssue, ConfigLoader, FileClassifierConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, Severity,
};
pub use gateway::{HttpRiskGateway, LocalRiskGateway};
pub use logging::JsonlPredictionLogger;
