// Rust guideline compliant 2026-10-12

//! Relational store composing the tier registry and the entry collection.
//!
//! Every mutation checks its preconditions before touching either side, so
//! a failed call leaves the store exactly as it was. At rest, each entry
//! points at the unranked bucket or at a registered tier.

use crate::config::{default_auto_tier_color, Config};
use crate::{
    Entry, EntryCollection, EntryDescriptor, Error, IdGenerator, Result, Tier, TierRef,
    TierRegistry,
};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// What happens to the entries of a removed tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalMode {
    /// Move member entries to the unranked bucket.
    #[default]
    KeepEntries,
    /// Delete member entries together with the tier.
    DeleteEntries,
}

/// Result of removing a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRemoval {
    /// The removed tier definition.
    pub tier: Tier,
    /// Number of member entries moved to the unranked bucket.
    pub unranked: usize,
    /// Member entries deleted along with the tier.
    pub deleted: Vec<Entry>,
}

/// A tier with its current member entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierGroup {
    /// The tier definition.
    pub tier: Tier,
    /// Member entries, newest first.
    pub entries: Vec<Entry>,
}

/// Derived view of the whole board, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Tiers in display order with their members.
    pub tiers: Vec<TierGroup>,
    /// Entries in the unranked bucket.
    pub unranked: Vec<Entry>,
}

impl Board {
    /// Returns the total number of entries on the board.
    pub fn entry_count(&self) -> usize {
        self.unranked.len()
            + self
                .tiers
                .iter()
                .map(|group| group.entries.len())
                .sum::<usize>()
    }
}

/// The entry/tier store.
///
/// One instance per board; callers own it and pass it by reference.
#[derive(Debug, Clone)]
pub struct TierStore {
    registry: TierRegistry,
    entries: EntryCollection,
    ids: IdGenerator,
    auto_tier_color: String,
}

impl Default for TierStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TierStore {
    /// Creates a store with no tiers and no entries.
    pub fn new() -> Self {
        Self::with_parts(TierRegistry::new(), IdGenerator::new(), default_auto_tier_color())
    }

    /// Creates a store seeded from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let registry = TierRegistry::from_tiers(config.default_tiers.iter().cloned())?;
        Ok(Self::with_parts(
            registry,
            IdGenerator::new(),
            config.auto_tier_color.clone(),
        ))
    }

    /// Creates a store seeded with tiers, using the given id generator.
    ///
    /// # Errors
    ///
    /// Returns an error if any tier is invalid or a name repeats.
    pub fn with_tiers<I>(tiers: I, ids: IdGenerator) -> Result<Self>
    where
        I: IntoIterator<Item = Tier>,
    {
        Ok(Self::with_parts(
            TierRegistry::from_tiers(tiers)?,
            ids,
            default_auto_tier_color(),
        ))
    }

    fn with_parts(registry: TierRegistry, ids: IdGenerator, auto_tier_color: String) -> Self {
        Self {
            registry,
            entries: EntryCollection::new(),
            ids,
            auto_tier_color,
        }
    }

    /// Returns the color given to tiers created on demand.
    pub fn auto_tier_color(&self) -> &str {
        &self.auto_tier_color
    }

    /// Sets the color given to tiers created on demand.
    ///
    /// # Errors
    ///
    /// Returns an error if the color is empty.
    pub fn set_auto_tier_color(&mut self, color: impl Into<String>) -> Result<()> {
        let color = color.into();
        if color.is_empty() {
            return Err(Error::InvalidTier(
                "Auto-tier color cannot be empty".to_string(),
            ));
        }
        self.auto_tier_color = color;
        Ok(())
    }
}

// Tiers
impl TierStore {
    /// Returns all tiers in creation order, without the unranked bucket.
    pub fn list_tiers(&self) -> Vec<Tier> {
        self.registry.list_tiers()
    }

    /// Returns true if a tier with this name is registered.
    pub fn has_tier(&self, name: &str) -> bool {
        self.registry.has_tier(name)
    }

    /// Returns the tier with this name.
    pub fn get_tier(&self, name: &str) -> Option<Tier> {
        self.registry.get_tier(name)
    }

    /// Returns true if the reference is the unranked bucket or a registered tier.
    pub fn resolves(&self, tier: &TierRef) -> bool {
        match tier {
            TierRef::Unranked => true,
            TierRef::Named(name) => self.has_tier(name),
        }
    }

    /// Appends a tier to the ranked order.
    ///
    /// # Errors
    ///
    /// Returns an error if the name already exists or the name or color is empty.
    pub fn add_tier(&mut self, tier: Tier) -> Result<Tier> {
        let tier = self.registry.add_tier(tier)?;
        debug!(tier = %tier.name, color = %tier.color, "tier added");
        Ok(tier)
    }

    /// Removes a tier and settles the fate of its entries in one step.
    ///
    /// # Arguments
    ///
    /// * `tier` - The tier to remove
    /// * `mode` - Whether member entries are unranked or deleted
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tier` is the unranked bucket
    /// - The named tier is not registered
    pub fn remove_tier(&mut self, tier: &TierRef, mode: RemovalMode) -> Result<TierRemoval> {
        let name = match tier {
            TierRef::Unranked => {
                return Err(Error::InvalidTier(
                    "The unranked bucket cannot be removed".to_string(),
                ))
            }
            TierRef::Named(name) => name,
        };
        if !self.registry.has_tier(name) {
            return Err(Error::TierNotFound(name.clone()));
        }

        let (unranked, deleted) = match mode {
            RemovalMode::KeepEntries => (
                self.entries.move_bucket(tier, &TierRef::Unranked),
                Vec::new(),
            ),
            RemovalMode::DeleteEntries => (0, self.entries.drain_tier(name)),
        };
        let removed = self.registry.remove_tier(name)?;

        debug!(
            tier = %removed.name,
            unranked,
            deleted = deleted.len(),
            "tier removed"
        );
        Ok(TierRemoval {
            tier: removed,
            unranked,
            deleted,
        })
    }

    /// Renames a tier and every entry reference to it.
    ///
    /// The tier keeps its position and color. Renaming to the current name
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `old_name` is not registered
    /// - `new_name` is empty or belongs to another tier
    pub fn rename_tier(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        self.registry.rename_tier(old_name, new_name)?;
        if old_name == new_name {
            return Ok(());
        }

        let moved = self.entries.move_bucket(
            &TierRef::Named(old_name.to_string()),
            &TierRef::Named(new_name.to_string()),
        );
        debug!(from = old_name, to = new_name, entries = moved, "tier renamed");
        Ok(())
    }

    /// Changes the color of a tier.
    ///
    /// # Errors
    ///
    /// Returns an error if the tier is not registered or the color is empty.
    pub fn set_tier_color(&mut self, name: &str, color: &str) -> Result<()> {
        self.registry.set_color(name, color)?;
        debug!(tier = name, color, "tier recolored");
        Ok(())
    }

    /// Replaces a tier's name and color in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename or the color would be rejected. Nothing
    /// changes in that case.
    pub fn edit_tier(&mut self, old_name: &str, replacement: Tier) -> Result<Tier> {
        replacement.validate()?;
        self.registry.check_rename(old_name, &replacement.name)?;

        self.rename_tier(old_name, &replacement.name)?;
        self.set_tier_color(&replacement.name, &replacement.color)?;
        Ok(replacement)
    }

    /// Moves every entry of one bucket into another.
    ///
    /// An unregistered target tier is created with the auto-tier color.
    ///
    /// # Returns
    ///
    /// The number of entries moved.
    ///
    /// # Errors
    ///
    /// Returns an error if the source tier is not registered or the target
    /// name is empty.
    pub fn move_tier_entries(&mut self, from: &TierRef, to: &TierRef) -> Result<usize> {
        if let TierRef::Named(name) = from {
            if !self.has_tier(name) {
                return Err(Error::TierNotFound(name.clone()));
            }
        }
        Self::check_target(to)?;

        self.ensure_tier(to)?;
        let moved = self.entries.move_bucket(from, to);
        debug!(from = %from, to = %to, entries = moved, "bucket moved");
        Ok(moved)
    }

    /// Registers a named target with the auto-tier color if it is missing.
    fn ensure_tier(&mut self, tier: &TierRef) -> Result<()> {
        if let TierRef::Named(name) = tier {
            if !self.registry.has_tier(name) {
                let created = self
                    .registry
                    .add_tier(Tier::new(name.clone(), self.auto_tier_color.clone()))?;
                debug!(tier = %created.name, "tier created on demand");
            }
        }
        Ok(())
    }

    fn check_target(tier: &TierRef) -> Result<()> {
        if let TierRef::Named(name) = tier {
            if name.is_empty() {
                return Err(Error::InvalidTier(
                    "Tier name cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

// Entries
impl TierStore {
    /// Returns all entries, newest first.
    pub fn list_entries(&self) -> &[Entry] {
        self.entries.list()
    }

    /// Returns the entry with this id.
    pub fn get_entry(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Returns the number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Creates entries from upload descriptors.
    ///
    /// Descriptors without a resource locator are dropped. Tier names that
    /// are not registered yet are created with the auto-tier color, in the
    /// order they are first referenced; a descriptor whose tier cannot be
    /// created is dropped. The new entries go in front of the
    /// existing ones, in descriptor order.
    ///
    /// # Returns
    ///
    /// The created entries.
    pub fn add_entries<I>(&mut self, descriptors: I) -> Vec<Entry>
    where
        I: IntoIterator<Item = EntryDescriptor>,
    {
        let mut batch = Vec::new();
        let mut dropped = 0usize;

        for descriptor in descriptors {
            if !descriptor.is_valid() {
                dropped += 1;
                continue;
            }
            let tier = match descriptor.tier {
                TierRef::Named(name) => TierRef::named(name),
                TierRef::Unranked => TierRef::Unranked,
            };
            if let Err(error) = self.ensure_tier(&tier) {
                warn!(src = %descriptor.src, tier = %tier, %error, "dropped entry descriptor");
                dropped += 1;
                continue;
            }
            let id = self.ids.next_id(&descriptor.src);
            batch.push(Entry::new(id, descriptor.src, tier));
        }

        if dropped > 0 {
            warn!(dropped, "dropped entry descriptors");
        }
        debug!(added = batch.len(), "entries added");

        self.entries.prepend(batch.clone());
        batch
    }

    /// Removes an entry.
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has this id.
    pub fn remove_entry(&mut self, id: &str) -> Result<Entry> {
        let entry = self.entries.remove(id)?;
        debug!(entry = id, "entry removed");
        Ok(entry)
    }

    /// Moves an entry to another bucket, keeping its position in the list.
    ///
    /// An unregistered target tier is created with the auto-tier color.
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has this id or the target name is empty.
    pub fn change_entry_tier(&mut self, id: &str, tier: TierRef) -> Result<Entry> {
        if !self.entries.contains(id) {
            return Err(Error::EntryNotFound(id.to_string()));
        }
        Self::check_target(&tier)?;

        self.ensure_tier(&tier)?;
        let entry = self.entries.set_tier(id, tier)?.clone();
        debug!(entry = id, tier = %entry.tier(), "entry moved");
        Ok(entry)
    }

    /// Returns the entries of one bucket, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if a named tier is not registered.
    pub fn filter_by_tier(&self, tier: &TierRef) -> Result<Vec<Entry>> {
        if let TierRef::Named(name) = tier {
            if !self.has_tier(name) {
                return Err(Error::TierNotFound(name.clone()));
            }
        }
        Ok(self.entries.in_tier(tier))
    }

    /// Returns every entry that belongs to some tier.
    pub fn ranked_entries(&self) -> Vec<Entry> {
        self.entries
            .list()
            .iter()
            .filter(|entry| !entry.tier().is_unranked())
            .cloned()
            .collect()
    }

    /// Returns the entries of the unranked bucket.
    pub fn unranked_entries(&self) -> Vec<Entry> {
        self.entries.in_tier(&TierRef::Unranked)
    }

    /// Builds the board view from the current tiers and entries.
    pub fn board(&self) -> Board {
        let tiers = self
            .registry
            .list_tiers()
            .into_iter()
            .map(|tier| {
                let entries = self.entries.in_tier(&TierRef::Named(tier.name.clone()));
                TierGroup { tier, entries }
            })
            .collect();

        Board {
            tiers,
            unranked: self.unranked_entries(),
        }
    }

    /// Verifies the referential invariants of the store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An entry references an unregistered tier
    /// - Two entries share an id
    pub fn check_integrity(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in self.entries.list() {
            if !seen.insert(entry.id()) {
                return Err(Error::InvalidEntry(format!(
                    "Duplicate entry id {}",
                    entry.id()
                )));
            }
            if let TierRef::Named(name) = entry.tier() {
                if !self.registry.has_tier(name) {
                    return Err(Error::TierNotFound(format!(
                        "{} (referenced by {})",
                        name,
                        entry.id()
                    )));
                }
            }
        }
        Ok(())
    }
}
