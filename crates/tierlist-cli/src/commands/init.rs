// Rust guideline compliant 2026-10-15

//! Implementation of the `tierlist init` command.

use anyhow::Result;
use std::path::Path;
use tierlist_app::AppContext;

use crate::output::OutputFormatter;

/// Writes a default `tierlist.toml` into the config directory.
///
/// # Errors
///
/// Returns an error if:
/// - The file already exists and `force` is false
/// - The directory or the file cannot be written
pub fn execute(config_dir: &Path, force: bool, formatter: &dyn OutputFormatter) -> Result<()> {
    let path = AppContext::init(config_dir, force)?;
    println!(
        "{}",
        formatter.format_message(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
