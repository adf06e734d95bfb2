//! Interactive application form
//!
//! Provides a readline-based form for editing and submitting a loan
//! application.

mod repl;

pub use repl::{FormRepl, ReplCommand, parse_command};
