//! Prediction subdomain: the risk classifier and its result.

pub mod classifier;
pub mod result;
pub mod risk;
