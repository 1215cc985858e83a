// Rust guideline compliant 2026-10-14

//! Parsers for user-supplied tier references and options.

use crate::error::{AppError, Result};
use tierlist_core::TierRef;

/// Spelling of the unranked bucket accepted by [`parse_tier_ref`].
pub const UNRANKED_ALIASES: [&str; 2] = ["-", "unranked"];

/// Parses a bucket argument.
///
/// `-` and `unranked` (any case) refer to the unranked bucket; anything else
/// is a tier name, kept exactly as given apart from surrounding whitespace.
///
/// # Errors
///
/// Returns an error if the value is empty.
pub fn parse_tier_ref(value: &str) -> Result<TierRef> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(
            "Tier name cannot be empty".to_string(),
        ));
    }
    if UNRANKED_ALIASES
        .iter()
        .any(|alias| alias.eq_ignore_ascii_case(value))
    {
        return Ok(TierRef::Unranked);
    }
    Ok(TierRef::Named(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tier_ref_unranked_aliases() {
        assert_eq!(parse_tier_ref("-").unwrap(), TierRef::Unranked);
        assert_eq!(parse_tier_ref("unranked").unwrap(), TierRef::Unranked);
        assert_eq!(parse_tier_ref(" Unranked ").unwrap(), TierRef::Unranked);
    }

    #[test]
    fn test_parse_tier_ref_named() {
        assert_eq!(parse_tier_ref("S").unwrap(), TierRef::named("S"));
        assert_eq!(parse_tier_ref(" Top ").unwrap(), TierRef::named("Top"));
    }

    #[test]
    fn test_parse_tier_ref_empty() {
        assert!(matches!(parse_tier_ref("  "), Err(AppError::InvalidInput(_))));
    }
}
