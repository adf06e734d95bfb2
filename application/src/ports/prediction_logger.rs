//! Port for structured prediction logging.
//!
//! Defines the [`PredictionLogger`] trait for recording every settled
//! submission (the record sent, the gateway used and the result or error)
//! to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port keeps an audit trail
//! in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured prediction event for logging.
pub struct PredictionEvent {
    /// Event type identifier (e.g., "prediction", "prediction_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl PredictionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging prediction events to a structured log.
///
/// `log` is synchronous and infallible; logging failures are ignored.
pub trait PredictionLogger: Send + Sync {
    /// Record a prediction event.
    fn log(&self, event: PredictionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoPredictionLogger;

impl PredictionLogger for NoPredictionLogger {
    fn log(&self, _event: PredictionEvent) {}
}
