// Rust guideline compliant 2026-10-12

//! Entry identifier generation and resolution.
//!
//! Ids have the form `ent-` followed by ten lowercase hex characters taken
//! from a SHA-256 digest of the session salt, the resource locator and a
//! monotonic nonce.

use crate::{Entry, Error, Result};
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Prefix carried by every entry id.
pub const ID_PREFIX: &str = "ent-";

/// Number of hex characters after the prefix.
pub const ID_HASH_LEN: usize = 10;

/// Generates an entry id from its inputs.
///
/// # Arguments
///
/// * `salt` - Per-session salt
/// * `src` - Resource locator of the entry
/// * `nonce` - Monotonic counter value
///
/// # Returns
///
/// An id in the format `ent-XXXXXXXXXX`.
pub fn generate_id(salt: &str, src: &str, nonce: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(src.as_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}{}", ID_PREFIX, &hex[..ID_HASH_LEN])
}

/// Validates that an id matches the `ent-XXXXXXXXXX` format.
///
/// # Errors
///
/// Returns an error if the prefix is missing, the hash part has the wrong
/// length, or it contains non-hex characters.
pub fn validate_id_format(id: &str) -> Result<()> {
    let hash = id
        .strip_prefix(ID_PREFIX)
        .ok_or_else(|| Error::InvalidEntry(format!("Id {} must start with {}", id, ID_PREFIX)))?;

    if hash.len() != ID_HASH_LEN
        || !hash
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    {
        return Err(Error::InvalidEntry(format!(
            "Id {} must have {} lowercase hex characters after the prefix",
            id, ID_HASH_LEN
        )));
    }

    Ok(())
}

/// Resolves a partial entry id to the full id of a single entry.
///
/// The partial id may be given with or without the `ent-` prefix. An exact
/// match always wins over prefix matches.
///
/// # Errors
///
/// Returns an error if:
/// - The partial id is empty or matches no entry
/// - The partial id matches more than one entry
pub fn resolve_partial_id(partial: &str, entries: &[Entry]) -> Result<String> {
    let partial = partial.trim();
    if partial.is_empty() {
        return Err(Error::EntryNotFound(String::new()));
    }

    if let Some(entry) = entries.iter().find(|entry| entry.id() == partial) {
        return Ok(entry.id().to_string());
    }

    let needle = if partial.starts_with(ID_PREFIX) {
        partial.to_string()
    } else {
        format!("{}{}", ID_PREFIX, partial)
    };

    let matches: Vec<String> = entries
        .iter()
        .filter(|entry| entry.id().starts_with(&needle))
        .map(|entry| entry.id().to_string())
        .collect();

    match matches.as_slice() {
        [] => Err(Error::EntryNotFound(partial.to_string())),
        [only] => Ok(only.clone()),
        _ => Err(Error::AmbiguousId(partial.to_string(), matches.clone())),
    }
}

/// Session-scoped generator of unique entry ids.
///
/// Every id handed out is remembered, so an id is never returned twice by
/// the same generator.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    salt: String,
    nonce: u64,
    issued: HashSet<String>,
}

impl IdGenerator {
    /// Creates a generator salted with the current time and process id.
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros());
        Self::with_salt(format!("{}:{}", nanos, std::process::id()))
    }

    /// Creates a generator with an explicit salt.
    ///
    /// Two generators with the same salt produce the same id sequence for
    /// the same inputs, which keeps tests deterministic.
    pub fn with_salt(salt: impl Into<String>) -> Self {
        Self {
            salt: salt.into(),
            nonce: 0,
            issued: HashSet::new(),
        }
    }

    /// Returns a fresh id for an entry with the given resource locator.
    pub fn next_id(&mut self, src: &str) -> String {
        loop {
            let id = generate_id(&self.salt, src, self.nonce);
            self.nonce = self.nonce.wrapping_add(1);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    /// Returns the number of ids issued so far.
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    /// Returns true if this generator has issued the id.
    pub fn has_issued(&self, id: &str) -> bool {
        self.issued.contains(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
