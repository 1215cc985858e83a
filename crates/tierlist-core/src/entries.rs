// Rust guideline compliant 2026-10-12

//! Entry collection.
//!
//! Entries are kept newest first. This module does not know which tiers
//! exist; [`crate::TierStore`] validates tier references before calling in.

use crate::{Entry, Error, Result, TierRef};

/// Ordered collection of entries, most recently added first.
#[derive(Debug, Clone, Default)]
pub struct EntryCollection {
    entries: Vec<Entry>,
}

impl EntryCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all entries, newest first.
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the entry with this id.
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Returns true if an entry with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Puts a batch in front of the existing entries, keeping batch order.
    pub fn prepend(&mut self, batch: Vec<Entry>) {
        if batch.is_empty() {
            return;
        }
        self.entries.splice(0..0, batch);
    }

    /// Removes an entry by id.
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has this id.
    pub fn remove(&mut self, id: &str) -> Result<Entry> {
        let index = self.index_of(id)?;
        Ok(self.entries.remove(index))
    }

    /// Reassigns one entry in place. Other entries keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has this id.
    pub fn set_tier(&mut self, id: &str, tier: TierRef) -> Result<&Entry> {
        let index = self.index_of(id)?;
        let entry = &mut self.entries[index];
        entry.set_tier(tier);
        Ok(entry)
    }

    /// Returns the entries of one bucket, in collection order.
    pub fn in_tier(&self, tier: &TierRef) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.tier() == tier)
            .cloned()
            .collect()
    }

    /// Moves every entry of one bucket (named or unranked) to another.
    ///
    /// # Returns
    ///
    /// The number of entries moved.
    pub fn move_bucket(&mut self, from: &TierRef, to: &TierRef) -> usize {
        if from == to {
            return 0;
        }
        let mut moved = 0;
        for entry in self.entries.iter_mut().filter(|entry| entry.tier() == from) {
            entry.set_tier(to.clone());
            moved += 1;
        }
        moved
    }

    /// Removes and returns every entry of the named tier.
    pub fn drain_tier(&mut self, name: &str) -> Vec<Entry> {
        let (drained, kept): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.tier().is_named(name));
        self.entries = kept;
        drained
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or_else(|| Error::EntryNotFound(id.to_string()))
    }
}
