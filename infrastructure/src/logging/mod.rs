//! Logging infrastructure: structured prediction logging.
//!
//! Provides [`JsonlPredictionLogger`], a JSONL file writer that implements
//! the [`PredictionLogger`](loanrisk_application::PredictionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlPredictionLogger;
