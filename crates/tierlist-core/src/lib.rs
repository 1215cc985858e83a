// Rust guideline compliant 2026-10-12

//! Tierlist Core Library
//!
//! This crate provides the foundational components for the Tierlist ranking board:
//! - Data models (Entry, Tier, TierRef, EntryDescriptor)
//! - Entry id generation and partial id resolution
//! - Tier registry (ordered, name-keyed)
//! - Entry collection (newest first)
//! - Relational store keeping tiers and entries consistent
//! - Drag/drop reassignment state machine
//! - Configuration and error types

pub mod config;
pub mod drag;
pub mod entries;
pub mod error;
pub mod identity;
pub mod models;
pub mod registry;
pub mod store;

pub use config::{Config, OutputFormat};
pub use drag::{DragEvent, DragOutcome, DragPayload, DragPhase, DragSession};
pub use entries::EntryCollection;
pub use error::{Error, Result};
pub use identity::IdGenerator;
pub use models::{Entry, EntryDescriptor, Tier, TierRef};
pub use registry::TierRegistry;
pub use store::{Board, RemovalMode, TierGroup, TierRemoval, TierStore};
