// Rust guideline compliant 2026-10-15

//! Implementation of the `tierlist templates` command.

use anyhow::Result;
use tierlist_app::templates::{query, TemplateQuery};

use crate::output::OutputFormatter;

/// Prints the reply to a template query.
///
/// An empty tag list is sent as no tags.
pub fn execute(name: Option<String>, tags: Vec<String>, formatter: &dyn OutputFormatter) -> Result<()> {
    let input = TemplateQuery {
        name,
        tags: if tags.is_empty() { None } else { Some(tags) },
    };
    println!("{}", formatter.format_templates(&query(Some(&input))));
    Ok(())
}
