// Rust guideline compliant 2026-10-15

//! Tierlist CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod script;
pub mod terminal;

pub use logging::{init_tracing, parse_log_level};
pub use output::{create_formatter, OutputFormatter};
pub use script::{execute_line, CommandOutput};
pub use terminal::should_use_color;
