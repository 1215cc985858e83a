// Rust guideline compliant 2026-10-15

//! Implementation of the `tierlist board` command.

use anyhow::Result;
use tierlist_app::AppContext;

use crate::output::OutputFormatter;

/// Prints the board a new session starts with.
pub fn execute(ctx: &AppContext, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", formatter.format_board(&ctx.store().board()));
    Ok(())
}
