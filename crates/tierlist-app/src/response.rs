// Rust guideline compliant 2026-10-14

//! JSON envelopes for command results.
//!
//! Every JSON line printed by the CLI is one of these two shapes, so callers
//! can branch on `status` before looking at the rest.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Envelope wrapping a successful result.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T: Serialize> SuccessEnvelope<T> {
    #[must_use]
    pub fn new(result: T) -> Self {
        Self {
            status: "ok",
            result,
        }
    }
}

/// Envelope describing a failed command.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `"error"`.
    pub status: &'static str,
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Builds the envelope for an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            status: "error",
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

impl From<&AppError> for ErrorEnvelope {
    fn from(error: &AppError) -> Self {
        Self::from_error(error)
    }
}
