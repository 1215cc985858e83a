// Rust guideline compliant 2026-10-12

//! Error types for the Tierlist core library.

use thiserror::Error;

/// Result type alias for Tierlist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Tierlist operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A tier with this name is already registered.
    #[error("Tier already exists: {0}")]
    DuplicateTier(String),

    /// No tier with this name is registered.
    #[error("Tier not found: {0}")]
    TierNotFound(String),

    /// No entry with this id exists.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Invalid entry data.
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Invalid tier data or an operation the unranked bucket does not support.
    #[error("Invalid tier: {0}")]
    InvalidTier(String),

    /// Invalid drag/drop state transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Ambiguous partial entry id.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
