// Rust guideline compliant 2026-10-14

//! Top-level application context.
//!
//! One `AppContext` exists per board. It owns the relational store, the drag
//! session for the single pointer, and the configuration the board was
//! created from. Frontends borrow it for every operation.

use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};
use tierlist_core::config::CONFIG_FILE;
use tierlist_core::{identity, Config, DragEvent, DragOutcome, DragSession, TierStore};
use tracing::{debug, info};

/// Application state for one board.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: Config,
    store: TierStore,
    drag: DragSession,
}

impl AppContext {
    /// Creates a context with a fresh board seeded from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured default tiers are invalid.
    pub fn new(config: Config) -> Result<Self> {
        let store = TierStore::from_config(&config)?;
        debug!(tiers = store.list_tiers().len(), "board created");
        Ok(Self {
            config,
            store,
            drag: DragSession::new(),
        })
    }

    /// Loads configuration from `config_dir` and creates a fresh board.
    ///
    /// A missing config file is not an error; defaults and environment
    /// overrides apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or is invalid.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config = Config::load(config_dir)?;
        Self::new(config)
    }

    /// Writes a default configuration file into `config_dir`.
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory that will hold `tierlist.toml`
    /// * `force` - Overwrite an existing file
    ///
    /// # Returns
    ///
    /// The path of the written file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists and `force` is false
    /// - The directory or the file cannot be written
    pub fn init(config_dir: &Path, force: bool) -> Result<PathBuf> {
        let path = config_dir.join(CONFIG_FILE);
        if path.exists() && !force {
            return Err(AppError::InvalidInput(format!(
                "{} already exists. Use --force to overwrite it.",
                path.display()
            )));
        }

        std::fs::create_dir_all(config_dir)?;
        Config::default().save(config_dir)?;
        info!(path = %path.display(), "config written");
        Ok(path)
    }

    /// Returns the configuration the board was created from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the store.
    pub fn store(&self) -> &TierStore {
        &self.store
    }

    /// Returns the store for mutation.
    pub fn store_mut(&mut self) -> &mut TierStore {
        &mut self.store
    }

    /// Returns the drag session.
    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    /// Feeds a pointer event to the drag session.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not accepted in the current phase or
    /// the drop is rejected by the store.
    pub fn drag(&mut self, event: DragEvent) -> Result<DragOutcome> {
        Ok(self.drag.handle(event, &mut self.store)?)
    }

    /// Resolves a full or partial entry id against the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the id matches no entry or several entries.
    pub fn resolve_entry_id(&self, partial: &str) -> Result<String> {
        Ok(identity::resolve_partial_id(
            partial,
            self.store.list_entries(),
        )?)
    }
}
