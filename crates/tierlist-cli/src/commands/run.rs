// Rust guideline compliant 2026-10-15

//! Implementation of the `tierlist run` command.
//!
//! Runs a session script against a fresh board built from the loaded
//! configuration. Command output goes to stdout. Errors go to stderr, except
//! in JSON mode where error envelopes are printed in line with the results.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, BufReader, Read};
use tierlist_app::{AppContext, AppError};
use tracing::{debug, info};

use crate::output::OutputFormatter;
use crate::script::execute_line;
use crate::terminal::print_error;

/// Options for a script run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Verify store invariants after every line.
    pub check: bool,
    /// Continue after a failed line.
    pub keep_going: bool,
    /// Print errors as JSON envelopes on stdout.
    pub json_errors: bool,
    /// Color error prefixes.
    pub use_color: bool,
}

/// Summary of a script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Lines that ran a command successfully.
    pub succeeded: usize,
    /// Lines that failed.
    pub failed: usize,
}

/// Runs the script at `source`, or stdin when `source` is `-`.
///
/// # Errors
///
/// Returns an error if the script cannot be read, or if any line failed.
pub fn execute(
    ctx: &mut AppContext,
    source: &str,
    options: RunOptions,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let reader: Box<dyn Read> = if source == "-" {
        Box::new(std::io::stdin())
    } else {
        let file = std::fs::File::open(source)
            .with_context(|| format!("Failed to open script {}", source))?;
        Box::new(file)
    };

    let summary = run_script(ctx, BufReader::new(reader), options, formatter, &mut |out| {
        println!("{}", out)
    })?;
    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "script finished"
    );

    if summary.failed > 0 {
        bail!("{} script line(s) failed", summary.failed);
    }
    Ok(())
}

/// Runs a script from any reader, handing each rendered output to `emit`.
///
/// Stops at the first failed line unless `keep_going` is set.
///
/// # Errors
///
/// Returns an error if the reader fails.
pub fn run_script<R: BufRead>(
    ctx: &mut AppContext,
    reader: R,
    options: RunOptions,
    formatter: &dyn OutputFormatter,
    emit: &mut dyn FnMut(String),
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        let result = execute_line(ctx, &line).and_then(|output| {
            if options.check {
                ctx.store().check_integrity().map_err(AppError::from)?;
            }
            Ok(output)
        });

        match result {
            Ok(Some(output)) => {
                debug!(line = line_no, "line ok");
                summary.succeeded += 1;
                emit(output.render(formatter));
            }
            Ok(None) => {}
            Err(error) => {
                summary.failed += 1;
                if options.json_errors {
                    emit(formatter.format_error(&error));
                } else {
                    print_error(
                        &format!("line {}: {}", line_no, formatter.format_error(&error)),
                        options.use_color,
                    );
                }
                if !options.keep_going {
                    break;
                }
            }
        }
    }

    Ok(summary)
}
