// Rust guideline compliant 2026-10-15

//! Output formatting module for the Tierlist CLI.
//!
//! Every command result goes through an [`OutputFormatter`]. The JSON
//! formatter prints one envelope per line so a script run produces JSON
//! Lines; the table and plain formatters target people and shell pipes.

use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use tierlist_app::{AppError, ErrorCode, ErrorEnvelope, MenuActionKind, SuccessEnvelope, TemplateReply};
use tierlist_core::{Board, Entry, OutputFormat, Tier};

/// Output formatter trait.
///
/// Defines how board data and command results are rendered for each
/// output format.
pub trait OutputFormatter {
    /// Formats the whole board, tiers first and the unranked bucket last.
    fn format_board(&self, board: &Board) -> String;

    /// Formats a list of entries.
    fn format_entries(&self, entries: &[Entry]) -> String;

    /// Formats the ranked tiers.
    fn format_tiers(&self, tiers: &[Tier]) -> String;

    /// Formats the options of a context menu.
    fn format_options(&self, options: &[MenuActionKind]) -> String;

    /// Formats a template query reply.
    fn format_templates(&self, reply: &TemplateReply) -> String;

    /// Formats the confirmation of a mutation.
    fn format_message(&self, message: &str) -> String;

    /// Formats an error.
    fn format_error(&self, error: &AppError) -> String;
}

/// JSON output formatter.
///
/// Wraps every result in a success or error envelope.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(result: T) -> String {
        serde_json::to_string(&SuccessEnvelope::new(result)).unwrap_or_else(|e| {
            json!({
                "status": "error",
                "code": ErrorCode::JsonError.as_str(),
                "message": e.to_string(),
            })
            .to_string()
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_board(&self, board: &Board) -> String {
        Self::envelope(board)
    }

    fn format_entries(&self, entries: &[Entry]) -> String {
        Self::envelope(json!({
            "entries": entries,
            "total": entries.len(),
        }))
    }

    fn format_tiers(&self, tiers: &[Tier]) -> String {
        Self::envelope(json!({ "tiers": tiers }))
    }

    fn format_options(&self, options: &[MenuActionKind]) -> String {
        let options: Vec<_> = options
            .iter()
            .map(|kind| json!({ "action": kind, "label": kind.label() }))
            .collect();
        Self::envelope(json!({ "options": options }))
    }

    fn format_templates(&self, reply: &TemplateReply) -> String {
        Self::envelope(reply)
    }

    fn format_message(&self, message: &str) -> String {
        Self::envelope(json!({ "message": message }))
    }

    fn format_error(&self, error: &AppError) -> String {
        serde_json::to_string(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| json!({ "status": "error", "message": error.to_string() }).to_string())
    }
}

/// Table output formatter.
pub struct TableFormatter;

impl TableFormatter {
    fn entry_cell(entries: &[Entry]) -> String {
        if entries.is_empty() {
            return "-".to_string();
        }
        entries
            .iter()
            .map(|entry| format!("{} {}", entry.id(), entry.src()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for TableFormatter {
    fn format_board(&self, board: &Board) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Tier", "Color", "Entries"]);

        for group in &board.tiers {
            builder.push_record(vec![
                group.tier.name.clone(),
                group.tier.color.clone(),
                Self::entry_cell(&group.entries),
            ]);
        }
        builder.push_record(vec![
            "(unranked)".to_string(),
            String::new(),
            Self::entry_cell(&board.unranked),
        ]);

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_entries(&self, entries: &[Entry]) -> String {
        if entries.is_empty() {
            return "No entries found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Source", "Tier"]);
        for entry in entries {
            builder.push_record(vec![
                entry.id().to_string(),
                entry.src().to_string(),
                entry.tier().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_tiers(&self, tiers: &[Tier]) -> String {
        if tiers.is_empty() {
            return "No tiers defined.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "Name", "Color"]);
        for (position, tier) in tiers.iter().enumerate() {
            builder.push_record(vec![
                (position + 1).to_string(),
                tier.name.clone(),
                tier.color.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_options(&self, options: &[MenuActionKind]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Option"]);
        for kind in options {
            builder.push_record(vec![kind.label()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_templates(&self, reply: &TemplateReply) -> String {
        match &reply.content {
            Some(content) => format!("{}\n{}", reply.message, content),
            None => reply.message.clone(),
        }
    }

    fn format_message(&self, message: &str) -> String {
        format!("✓ {}", message)
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// One record per line, fields separated by tabs.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_board(&self, board: &Board) -> String {
        let mut output = String::new();
        for group in &board.tiers {
            let ids: Vec<&str> = group.entries.iter().map(|entry| entry.id()).collect();
            output.push_str(&format!("{}\t{}\n", group.tier.name, ids.join(" ")));
        }
        let ids: Vec<&str> = board.unranked.iter().map(|entry| entry.id()).collect();
        output.push_str(&format!("-\t{}\n", ids.join(" ")));
        output
    }

    fn format_entries(&self, entries: &[Entry]) -> String {
        let mut output = String::new();
        for entry in entries {
            let tier = entry.tier().name().unwrap_or("-");
            output.push_str(&format!("{}\t{}\t{}\n", entry.id(), entry.src(), tier));
        }
        output
    }

    fn format_tiers(&self, tiers: &[Tier]) -> String {
        let mut output = String::new();
        for tier in tiers {
            output.push_str(&format!("{}\t{}\n", tier.name, tier.color));
        }
        output
    }

    fn format_options(&self, options: &[MenuActionKind]) -> String {
        let mut output = String::new();
        for kind in options {
            output.push_str(kind.label());
            output.push('\n');
        }
        output
    }

    fn format_templates(&self, reply: &TemplateReply) -> String {
        reply
            .content
            .clone()
            .unwrap_or_else(|| reply.message.clone())
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("error[{}]: {}", error.code().as_str(), error)
    }
}

/// Creates the formatter for an output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
