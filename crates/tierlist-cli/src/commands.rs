// Rust guideline compliant 2026-10-15

//! Command implementations for the Tierlist CLI.

pub mod board;
pub mod init;
pub mod run;
pub mod templates;
