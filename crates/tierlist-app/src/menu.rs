// Rust guideline compliant 2026-10-14

//! Context menu actions for entries and tiers.
//!
//! The UI shows [`options_for`] when an entry or a tier is right-clicked,
//! then calls [`apply`] with the chosen action. Every action is one store
//! operation.

use crate::error::{AppError, Result};
use serde::Serialize;
use tierlist_core::{Entry, RemovalMode, Tier, TierRef, TierRemoval, TierStore};
use tracing::debug;

/// What the menu was opened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    /// An entry, by full id.
    Entry {
        /// Entry id.
        id: String,
    },
    /// A registered tier, by name.
    Tier {
        /// Tier name.
        name: String,
    },
}

/// Menu option without its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuActionKind {
    RemoveEntry,
    EditTier,
    RemoveTier,
    RemoveTierAndEntries,
    MoveEntriesToTier,
}

impl MenuActionKind {
    /// Returns the label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::RemoveEntry => "Remove Entry",
            Self::EditTier => "Edit Tier",
            Self::RemoveTier => "Remove Tier",
            Self::RemoveTierAndEntries => "Remove Tier And Entries",
            Self::MoveEntriesToTier => "Move Entries To Tier",
        }
    }
}

const ENTRY_OPTIONS: &[MenuActionKind] = &[MenuActionKind::RemoveEntry];

const TIER_OPTIONS: &[MenuActionKind] = &[
    MenuActionKind::EditTier,
    MenuActionKind::RemoveTier,
    MenuActionKind::RemoveTierAndEntries,
    MenuActionKind::MoveEntriesToTier,
];

/// Returns the options offered for a target, in menu order.
pub fn options_for(target: &MenuTarget) -> &'static [MenuActionKind] {
    match target {
        MenuTarget::Entry { .. } => ENTRY_OPTIONS,
        MenuTarget::Tier { .. } => TIER_OPTIONS,
    }
}

/// A chosen menu option with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Delete the entry.
    RemoveEntry,
    /// Replace the tier's name and color.
    EditTier {
        /// New name. May equal the current one.
        name: String,
        /// New color.
        color: String,
    },
    /// Delete the tier and unrank its entries.
    RemoveTier,
    /// Delete the tier together with its entries.
    RemoveTierAndEntries,
    /// Move every entry of the tier into another bucket.
    MoveEntriesToTier {
        /// Destination bucket. Created on demand if it is a new name.
        target: TierRef,
    },
}

impl MenuAction {
    /// Returns the option this action was chosen from.
    pub fn kind(&self) -> MenuActionKind {
        match self {
            Self::RemoveEntry => MenuActionKind::RemoveEntry,
            Self::EditTier { .. } => MenuActionKind::EditTier,
            Self::RemoveTier => MenuActionKind::RemoveTier,
            Self::RemoveTierAndEntries => MenuActionKind::RemoveTierAndEntries,
            Self::MoveEntriesToTier { .. } => MenuActionKind::MoveEntriesToTier,
        }
    }
}

/// Result of applying a menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    EntryRemoved(Entry),
    TierEdited(Tier),
    TierRemoved(TierRemoval),
    EntriesMoved {
        /// Destination bucket.
        target: TierRef,
        /// Number of entries moved.
        count: usize,
    },
}

/// Applies a menu action to the store.
///
/// # Errors
///
/// Returns an error if:
/// - The action is not offered for the target
/// - The underlying store operation fails
pub fn apply(store: &mut TierStore, target: &MenuTarget, action: MenuAction) -> Result<MenuOutcome> {
    if !options_for(target).contains(&action.kind()) {
        return Err(AppError::InvalidInput(format!(
            "'{}' is not available here",
            action.kind().label()
        )));
    }
    debug!(?target, action = action.kind().label(), "menu action");

    let outcome = match (target, action) {
        (MenuTarget::Entry { id }, MenuAction::RemoveEntry) => {
            MenuOutcome::EntryRemoved(store.remove_entry(id)?)
        }
        (MenuTarget::Tier { name }, MenuAction::EditTier { name: new_name, color }) => {
            MenuOutcome::TierEdited(store.edit_tier(name, Tier::new(new_name, color))?)
        }
        (MenuTarget::Tier { name }, MenuAction::RemoveTier) => MenuOutcome::TierRemoved(
            store.remove_tier(&TierRef::Named(name.clone()), RemovalMode::KeepEntries)?,
        ),
        (MenuTarget::Tier { name }, MenuAction::RemoveTierAndEntries) => {
            MenuOutcome::TierRemoved(
                store.remove_tier(&TierRef::Named(name.clone()), RemovalMode::DeleteEntries)?,
            )
        }
        (MenuTarget::Tier { name }, MenuAction::MoveEntriesToTier { target }) => {
            let count = store.move_tier_entries(&TierRef::Named(name.clone()), &target)?;
            MenuOutcome::EntriesMoved { target, count }
        }
        (_, action) => {
            return Err(AppError::InvalidInput(format!(
                "'{}' is not available here",
                action.kind().label()
            )))
        }
    };
    Ok(outcome)
}
