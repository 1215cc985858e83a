// Rust guideline compliant 2026-10-12

//! Core data models for Tierlist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference from an entry to the bucket it belongs to.
///
/// The unranked bucket is not a stored tier. It is always present and can
/// never be removed. On the wire a `TierRef` is a nullable tier name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum TierRef {
    /// A registered tier, referenced by name.
    Named(String),
    /// The implicit unranked bucket.
    #[default]
    Unranked,
}

impl TierRef {
    /// Creates a reference to a named tier.
    ///
    /// An empty name refers to the unranked bucket.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            Self::Unranked
        } else {
            Self::Named(name)
        }
    }

    /// Returns the tier name, or `None` for the unranked bucket.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Unranked => None,
        }
    }

    /// Returns true if this is the unranked bucket.
    pub fn is_unranked(&self) -> bool {
        matches!(self, Self::Unranked)
    }

    /// Returns true if this reference points at the named tier.
    pub fn is_named(&self, name: &str) -> bool {
        self.name() == Some(name)
    }
}

impl From<Option<String>> for TierRef {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unranked, Self::named)
    }
}

impl From<TierRef> for Option<String> {
    fn from(value: TierRef) -> Self {
        match value {
            TierRef::Named(name) => Some(name),
            TierRef::Unranked => None,
        }
    }
}

impl From<&str> for TierRef {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}

impl fmt::Display for TierRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Unranked => f.write_str("(unranked)"),
        }
    }
}

/// A named, colored ranking bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Unique, case-sensitive tier name. Also the tier's key.
    pub name: String,
    /// Display color token. Opaque to the store.
    pub color: String,
}

impl Tier {
    /// Creates a new tier definition.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Validates the tier data.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or the color is empty.
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.is_empty() {
            return Err(crate::Error::InvalidTier(
                "Tier name cannot be empty".to_string(),
            ));
        }

        if self.color.is_empty() {
            return Err(crate::Error::InvalidTier(format!(
                "Tier {} has no color",
                self.name
            )));
        }

        Ok(())
    }
}

/// A single item being ranked.
///
/// `id` and `src` are fixed at creation. Only the store reassigns `tier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    id: String,
    src: String,
    #[serde(rename = "tier_name")]
    tier: TierRef,
}

impl Entry {
    pub(crate) fn new(id: String, src: String, tier: TierRef) -> Self {
        Self { id, src, tier }
    }

    /// Unique entry identifier (format: ent-XXXXXXXXXX).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resource locator, e.g. an image blob URL.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// The bucket this entry belongs to.
    pub fn tier(&self) -> &TierRef {
        &self.tier
    }

    pub(crate) fn set_tier(&mut self, tier: TierRef) {
        self.tier = tier;
    }
}

/// Request to create an entry, as produced by the upload UI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryDescriptor {
    /// Resource locator. Descriptors with an empty `src` are dropped.
    #[serde(default)]
    pub src: String,
    /// Target bucket. Unregistered tier names are created on demand.
    #[serde(default, rename = "tier_name")]
    pub tier: TierRef,
}

impl EntryDescriptor {
    /// Creates a descriptor for an unranked entry.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            tier: TierRef::Unranked,
        }
    }

    /// Creates a descriptor targeting a bucket.
    pub fn in_tier(src: impl Into<String>, tier: impl Into<TierRef>) -> Self {
        Self {
            src: src.into(),
            tier: tier.into(),
        }
    }

    /// Returns true if the descriptor carries a resource locator.
    pub fn is_valid(&self) -> bool {
        !self.src.is_empty()
    }
}
