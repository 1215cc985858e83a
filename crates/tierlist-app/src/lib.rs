// Rust guideline compliant 2026-10-14

//! Shared application services for Tierlist.
//!
//! This crate sits between the core store and user-facing frontends. It owns
//! the application context (store, drag session and configuration), maps
//! core errors to stable error codes, and implements the context menu and
//! template query actions.

pub mod context;
pub mod error;
pub mod menu;
pub mod parse;
pub mod response;
pub mod templates;

pub use context::AppContext;
pub use error::{AppError, ErrorCode, Result};
pub use menu::{MenuAction, MenuActionKind, MenuOutcome, MenuTarget};
pub use parse::parse_tier_ref;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use templates::{TemplateQuery, TemplateReply};
