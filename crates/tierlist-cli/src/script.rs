// Rust guideline compliant 2026-10-15

//! Session scripts.
//!
//! A script drives one board line by line. Each line is one command, parsed
//! with clap exactly like a command line without the binary name. Blank
//! lines and lines starting with `#` are skipped.

use clap::{Parser, Subcommand};
use tierlist_app::menu::{self, options_for};
use tierlist_app::{
    parse_tier_ref, AppContext, AppError, MenuAction, MenuActionKind, MenuOutcome, MenuTarget,
    Result, TemplateReply,
};
use tierlist_core::{
    Board, DragEvent, DragOutcome, DragPayload, Entry, EntryDescriptor, Tier, TierRef,
};

use crate::output::OutputFormatter;

/// One parsed script line.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
pub struct ScriptLine {
    #[command(subcommand)]
    pub command: ScriptCommand,
}

/// Commands available in a session script.
#[derive(Subcommand, Debug)]
pub enum ScriptCommand {
    /// Manage tiers
    Tier {
        #[command(subcommand)]
        action: TierAction,
    },

    /// Add entries, unranked unless --tier is given
    Add {
        /// Resource locators
        #[arg(required = true)]
        srcs: Vec<String>,

        /// Target tier, created if missing
        #[arg(long)]
        tier: Option<String>,
    },

    /// Move an entry to a tier ('-' for unranked)
    Move {
        /// Entry ID (full or partial)
        id: String,

        /// Target tier
        tier: String,
    },

    /// Remove an entry
    Remove {
        /// Entry ID (full or partial)
        id: String,
    },

    /// Drag an entry onto a tier ('-' for unranked)
    Drag {
        /// Entry ID (full or partial)
        id: String,

        /// Drop target
        tier: String,

        /// Abort the drag over the target instead of dropping
        #[arg(long)]
        cancel: bool,
    },

    /// List entries, optionally of one tier ('-' for unranked)
    List {
        /// Tier to filter by
        tier: Option<String>,
    },

    /// Show the board
    Board,

    /// Show context menu options
    Menu {
        #[command(subcommand)]
        target: MenuTargetArg,
    },
}

/// Tier subcommands.
#[derive(Subcommand, Debug)]
pub enum TierAction {
    /// Append a tier
    Add {
        /// Tier name
        name: String,

        /// Display color (defaults to the auto-tier color)
        color: Option<String>,
    },

    /// Remove a tier, unranking its entries
    Remove {
        /// Tier name
        name: String,

        /// Delete the tier's entries instead
        #[arg(long)]
        delete_entries: bool,
    },

    /// Rename a tier and its entries' references
    Rename {
        /// Current name
        old: String,

        /// New name
        new: String,
    },

    /// Replace a tier's name and color
    Edit {
        /// Current name
        name: String,

        /// New name
        new_name: String,

        /// New color
        color: String,
    },

    /// Change a tier's color
    Color {
        /// Tier name
        name: String,

        /// New color
        color: String,
    },

    /// Move all entries of a tier to another tier ('-' for unranked)
    Move {
        /// Source tier
        from: String,

        /// Target tier
        to: String,
    },

    /// List tiers in display order
    List,
}

/// Target of the `menu` command.
#[derive(Subcommand, Debug)]
pub enum MenuTargetArg {
    /// Options for an entry
    Entry {
        /// Entry ID (full or partial)
        id: String,
    },

    /// Options for a tier
    Tier {
        /// Tier name
        name: String,
    },
}

/// Result of one script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Board(Board),
    Entries(Vec<Entry>),
    Tiers(Vec<Tier>),
    Options(Vec<MenuActionKind>),
    Templates(TemplateReply),
    Message(String),
}

impl CommandOutput {
    /// Renders the output with a formatter.
    pub fn render(&self, formatter: &dyn OutputFormatter) -> String {
        match self {
            Self::Board(board) => formatter.format_board(board),
            Self::Entries(entries) => formatter.format_entries(entries),
            Self::Tiers(tiers) => formatter.format_tiers(tiers),
            Self::Options(options) => formatter.format_options(options),
            Self::Templates(reply) => formatter.format_templates(reply),
            Self::Message(message) => formatter.format_message(message),
        }
    }
}

/// Splits a script line into words.
///
/// Words are separated by whitespace. Single or double quotes group a word
/// containing spaces; quotes do not nest and there are no escapes.
///
/// # Errors
///
/// Returns an error if a quote is left open.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(AppError::InvalidInput("Unterminated quote".to_string()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Parses one script line.
///
/// # Returns
///
/// `None` for blank lines and comments.
///
/// # Errors
///
/// Returns an error if the line is not a valid command.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words = split_words(trimmed)?;
    let parsed = ScriptLine::try_parse_from(words).map_err(|e| {
        let rendered = e.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        AppError::InvalidInput(first.trim_start_matches("error: ").to_string())
    })?;
    Ok(Some(parsed.command))
}

/// Executes one script line against the board.
///
/// # Returns
///
/// `None` for blank lines and comments, otherwise the command output.
///
/// # Errors
///
/// Returns an error if the line cannot be parsed or the command fails. A
/// failed command leaves the board unchanged.
pub fn execute_line(ctx: &mut AppContext, line: &str) -> Result<Option<CommandOutput>> {
    match parse_line(line)? {
        Some(command) => execute(ctx, command).map(Some),
        None => Ok(None),
    }
}

/// Executes a parsed script command.
///
/// # Errors
///
/// Returns an error if the command fails.
pub fn execute(ctx: &mut AppContext, command: ScriptCommand) -> Result<CommandOutput> {
    match command {
        ScriptCommand::Tier { action } => execute_tier(ctx, action),
        ScriptCommand::Add { srcs, tier } => {
            let tier = match tier {
                Some(name) => parse_tier_ref(&name)?,
                None => TierRef::Unranked,
            };
            let descriptors = srcs
                .into_iter()
                .map(|src| EntryDescriptor::in_tier(src, tier.clone()));
            let created = ctx.store_mut().add_entries(descriptors);
            Ok(CommandOutput::Entries(created))
        }
        ScriptCommand::Move { id, tier } => {
            let id = ctx.resolve_entry_id(&id)?;
            let tier = parse_tier_ref(&tier)?;
            let entry = ctx.store_mut().change_entry_tier(&id, tier)?;
            Ok(CommandOutput::Message(format!(
                "Moved {} to {}",
                entry.id(),
                entry.tier()
            )))
        }
        ScriptCommand::Remove { id } => {
            let id = ctx.resolve_entry_id(&id)?;
            let outcome = menu::apply(
                ctx.store_mut(),
                &MenuTarget::Entry { id },
                MenuAction::RemoveEntry,
            )?;
            Ok(describe(outcome))
        }
        ScriptCommand::Drag { id, tier, cancel } => drag(ctx, &id, &tier, cancel),
        ScriptCommand::List { tier } => {
            let entries = match tier {
                Some(tier) => ctx.store().filter_by_tier(&parse_tier_ref(&tier)?)?,
                None => ctx.store().list_entries().to_vec(),
            };
            Ok(CommandOutput::Entries(entries))
        }
        ScriptCommand::Board => Ok(CommandOutput::Board(ctx.store().board())),
        ScriptCommand::Menu { target } => {
            let target = match target {
                MenuTargetArg::Entry { id } => MenuTarget::Entry {
                    id: ctx.resolve_entry_id(&id)?,
                },
                MenuTargetArg::Tier { name } => {
                    if !ctx.store().has_tier(&name) {
                        return Err(tierlist_core::Error::TierNotFound(name).into());
                    }
                    MenuTarget::Tier { name }
                }
            };
            Ok(CommandOutput::Options(options_for(&target).to_vec()))
        }
    }
}

fn execute_tier(ctx: &mut AppContext, action: TierAction) -> Result<CommandOutput> {
    let store = ctx.store_mut();
    match action {
        TierAction::Add { name, color } => {
            let color = color.unwrap_or_else(|| store.auto_tier_color().to_string());
            let tier = store.add_tier(Tier::new(name, color))?;
            Ok(CommandOutput::Message(format!("Added tier {}", tier.name)))
        }
        TierAction::Remove {
            name,
            delete_entries,
        } => {
            let action = if delete_entries {
                MenuAction::RemoveTierAndEntries
            } else {
                MenuAction::RemoveTier
            };
            let outcome = menu::apply(store, &MenuTarget::Tier { name }, action)?;
            Ok(describe(outcome))
        }
        TierAction::Rename { old, new } => {
            store.rename_tier(&old, &new)?;
            Ok(CommandOutput::Message(format!(
                "Renamed tier {} to {}",
                old, new
            )))
        }
        TierAction::Edit {
            name,
            new_name,
            color,
        } => {
            let outcome = menu::apply(
                store,
                &MenuTarget::Tier { name },
                MenuAction::EditTier {
                    name: new_name,
                    color,
                },
            )?;
            Ok(describe(outcome))
        }
        TierAction::Color { name, color } => {
            store.set_tier_color(&name, &color)?;
            Ok(CommandOutput::Message(format!(
                "Tier {} is now {}",
                name, color
            )))
        }
        TierAction::Move { from, to } => {
            let target = parse_tier_ref(&to)?;
            let outcome = match parse_tier_ref(&from)? {
                TierRef::Named(name) => menu::apply(
                    store,
                    &MenuTarget::Tier { name },
                    MenuAction::MoveEntriesToTier { target },
                )?,
                TierRef::Unranked => {
                    let count = store.move_tier_entries(&TierRef::Unranked, &target)?;
                    MenuOutcome::EntriesMoved { target, count }
                }
            };
            Ok(describe(outcome))
        }
        TierAction::List => Ok(CommandOutput::Tiers(store.list_tiers())),
    }
}

fn drag(ctx: &mut AppContext, id: &str, tier: &str, cancel: bool) -> Result<CommandOutput> {
    let id = ctx.resolve_entry_id(id)?;
    let target = parse_tier_ref(tier)?;
    let payload = ctx
        .store()
        .get_entry(&id)
        .map(DragPayload::for_entry)
        .ok_or_else(|| tierlist_core::Error::EntryNotFound(id.clone()))?;

    ctx.drag(DragEvent::Start(payload))?;
    ctx.drag(DragEvent::Enter(target.clone()))?;
    let last = if cancel {
        DragEvent::Cancel
    } else {
        DragEvent::Drop(target)
    };

    match ctx.drag(last)? {
        DragOutcome::Moved(entry) => Ok(CommandOutput::Message(format!(
            "Dropped {} on {}",
            entry.id(),
            entry.tier()
        ))),
        _ => Ok(CommandOutput::Message(format!("Drag of {} cancelled", id))),
    }
}

fn describe(outcome: MenuOutcome) -> CommandOutput {
    let message = match outcome {
        MenuOutcome::EntryRemoved(entry) => format!("Removed entry {}", entry.id()),
        MenuOutcome::TierEdited(tier) => format!("Tier is now {} ({})", tier.name, tier.color),
        MenuOutcome::TierRemoved(removal) if removal.deleted.is_empty() => format!(
            "Removed tier {}, {} entries unranked",
            removal.tier.name, removal.unranked
        ),
        MenuOutcome::TierRemoved(removal) => format!(
            "Removed tier {} and {} entries",
            removal.tier.name,
            removal.deleted.len()
        ),
        MenuOutcome::EntriesMoved { target, count } => {
            format!("Moved {} entries to {}", count, target)
        }
    };
    CommandOutput::Message(message)
}
