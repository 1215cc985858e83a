// Rust guideline compliant 2026-10-14

//! Error handling for Tierlist application services.

use serde::Serialize;
use thiserror::Error;
use tierlist_core::Error as CoreError;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and script responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// An entry or tier was not found.
    NotFound,
    /// A tier name is already taken.
    Duplicate,
    /// A partial entry id matched several entries.
    AmbiguousId,
    /// A drag event arrived in a phase that does not accept it.
    InvalidTransition,
    /// Entry, tier or configuration data failed validation.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure while reading or writing configuration.
    IoError,
    /// JSON output could not be serialized.
    JsonError,
}

impl ErrorCode {
    /// Returns the code as it appears in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Duplicate => "duplicate",
            Self::AmbiguousId => "ambiguous_id",
            Self::InvalidTransition => "invalid_transition",
            Self::ValidationError => "validation_error",
            Self::InvalidInput => "invalid_input",
            Self::IoError => "io_error",
            Self::JsonError => "json_error",
        }
    }
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core store operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::TierNotFound(_) | CoreError::EntryNotFound(_) => ErrorCode::NotFound,
                CoreError::DuplicateTier(_) => ErrorCode::Duplicate,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::InvalidEntry(_)
                | CoreError::InvalidTier(_)
                | CoreError::InvalidConfig(_) => ErrorCode::ValidationError,
                CoreError::Io(_) => ErrorCode::IoError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(CoreError::AmbiguousId(partial, matches)) => Some(serde_json::json!({
                "partial": partial,
                "matches": matches,
            })),
            AppError::Core(CoreError::TierNotFound(name)) => Some(serde_json::json!({
                "tier": name,
            })),
            AppError::Core(CoreError::EntryNotFound(id)) => Some(serde_json::json!({
                "entry": id,
            })),
            AppError::Core(CoreError::DuplicateTier(name)) => Some(serde_json::json!({
                "tier": name,
            })),
            _ => None,
        }
    }
}
