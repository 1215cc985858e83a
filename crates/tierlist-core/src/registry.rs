// Rust guideline compliant 2026-10-12

//! Tier registry.
//!
//! Keeps tier definitions keyed by name for constant-time lookup, plus an
//! order vector preserving creation order for ranked display. The unranked
//! bucket is never stored here.

use crate::{Error, Result, Tier};
use std::collections::HashMap;

/// Ordered, name-keyed collection of tiers.
#[derive(Debug, Clone, Default)]
pub struct TierRegistry {
    /// Tier names in creation order.
    order: Vec<String>,
    /// Map of tier names to their colors.
    colors: HashMap<String, String>,
}

impl TierRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from tier definitions, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any tier is invalid or a name repeats.
    pub fn from_tiers<I>(tiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Tier>,
    {
        let mut registry = Self::new();
        for tier in tiers {
            registry.add_tier(tier)?;
        }
        Ok(registry)
    }

    /// Returns all tiers in creation order.
    pub fn list_tiers(&self) -> Vec<Tier> {
        self.order
            .iter()
            .filter_map(|name| self.get_tier(name))
            .collect()
    }

    /// Returns tier names in creation order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Returns true if a tier with this name is registered.
    pub fn has_tier(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Returns the tier with this name.
    pub fn get_tier(&self, name: &str) -> Option<Tier> {
        self.colors
            .get(name)
            .map(|color| Tier::new(name, color.clone()))
    }

    /// Returns the display position of a tier.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|candidate| candidate == name)
    }

    /// Returns the number of registered tiers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no tiers are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Appends a tier to the end of the order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name or color is empty
    /// - A tier with the same name already exists
    pub fn add_tier(&mut self, tier: Tier) -> Result<Tier> {
        tier.validate()?;

        if self.has_tier(&tier.name) {
            return Err(Error::DuplicateTier(tier.name));
        }

        self.order.push(tier.name.clone());
        self.colors.insert(tier.name.clone(), tier.color.clone());
        Ok(tier)
    }

    /// Removes a tier from the registry. Entries are not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the tier is not registered.
    pub fn remove_tier(&mut self, name: &str) -> Result<Tier> {
        let color = self
            .colors
            .remove(name)
            .ok_or_else(|| Error::TierNotFound(name.to_string()))?;
        self.order.retain(|candidate| candidate != name);
        Ok(Tier::new(name, color))
    }

    /// Renames a tier in place, keeping its position and color.
    ///
    /// Renaming a tier to its current name is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `old_name` is not registered
    /// - `new_name` is empty
    /// - `new_name` belongs to another tier
    pub fn rename_tier(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        self.check_rename(old_name, new_name)?;
        if old_name == new_name {
            return Ok(());
        }

        if let Some(color) = self.colors.remove(old_name) {
            self.colors.insert(new_name.to_string(), color);
        }
        if let Some(slot) = self.order.iter_mut().find(|candidate| *candidate == old_name) {
            *slot = new_name.to_string();
        }
        Ok(())
    }

    /// Checks that a rename would succeed, without applying it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TierRegistry::rename_tier`].
    pub fn check_rename(&self, old_name: &str, new_name: &str) -> Result<()> {
        if !self.has_tier(old_name) {
            return Err(Error::TierNotFound(old_name.to_string()));
        }
        if new_name.is_empty() {
            return Err(Error::InvalidTier(
                "Tier name cannot be empty".to_string(),
            ));
        }
        if old_name != new_name && self.has_tier(new_name) {
            return Err(Error::DuplicateTier(new_name.to_string()));
        }
        Ok(())
    }

    /// Changes the color of a tier.
    ///
    /// # Errors
    ///
    /// Returns an error if the tier is not registered or the color is empty.
    pub fn set_color(&mut self, name: &str, color: &str) -> Result<()> {
        if color.is_empty() {
            return Err(Error::InvalidTier(format!("Tier {} has no color", name)));
        }
        let slot = self
            .colors
            .get_mut(name)
            .ok_or_else(|| Error::TierNotFound(name.to_string()))?;
        *slot = color.to_string();
        Ok(())
    }
}
