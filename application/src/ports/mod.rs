//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod prediction_logger;
pub mod progress;
pub mod risk_gateway;
