//! Presentation layer for loanrisk
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive application form.

pub mod cli;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use form::FormRepl;
pub use output::console::ConsoleFormatter;
pub use output::severity::SeverityTier;
pub use progress::reporter::SpinnerProgress;
