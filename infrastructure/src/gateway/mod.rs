//! Risk gateway adapters
//!
//! - [`LocalRiskGateway`]: heuristic classifier in-process
//! - [`HttpRiskGateway`]: remote prediction service over HTTP

pub mod http;
pub mod local;

pub use http::HttpRiskGateway;
pub use local::LocalRiskGateway;
