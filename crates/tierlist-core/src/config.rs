// Rust guideline compliant 2026-10-12

//! Configuration management for Tierlist.

use crate::{Result, Tier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "tierlist.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for a Tierlist board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Color assigned to tiers created on demand by entry moves.
    #[serde(default = "default_auto_tier_color")]
    pub auto_tier_color: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Tiers every new board starts with, in ranked order.
    #[serde(default = "default_tiers")]
    pub default_tiers: Vec<Tier>,
}

/// Default ranked tiers.
pub fn default_tiers() -> Vec<Tier> {
    vec![
        Tier::new("S", "#d97706"),
        Tier::new("A", "#ea580c"),
        Tier::new("B", "#ca8a04"),
        Tier::new("C", "#16a34a"),
        Tier::new("D", "#2563eb"),
    ]
}

/// Default color for tiers created on demand.
pub fn default_auto_tier_color() -> String {
    "#fef3c7".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_tier_color: default_auto_tier_color(),
            output_format: OutputFormat::default(),
            default_tiers: default_tiers(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/tierlist.toml`
    /// 3. Environment variables with `TIERLIST_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TIERLIST_AUTO_TIER_COLOR` - Color for tiers created on demand
    /// - `TIERLIST_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `TIERLIST_DEFAULT_TIERS` - Comma-separated `name=color` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TIERLIST_AUTO_TIER_COLOR") {
            self.auto_tier_color = val;
        }

        if let Ok(val) = std::env::var("TIERLIST_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "TIERLIST_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("TIERLIST_DEFAULT_TIERS") {
            self.default_tiers = parse_tier_list(&val)?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - auto_tier_color is empty
    /// - a default tier has an empty name or color
    /// - two default tiers share a name
    pub fn validate(&self) -> Result<()> {
        if self.auto_tier_color.is_empty() {
            return Err(crate::Error::InvalidConfig(
                "auto_tier_color cannot be empty".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for tier in &self.default_tiers {
            tier.validate()
                .map_err(|e| crate::Error::InvalidConfig(e.to_string()))?;
            if !names.insert(tier.name.as_str()) {
                return Err(crate::Error::InvalidConfig(format!(
                    "default_tiers lists {} more than once",
                    tier.name
                )));
            }
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Parses `S=#d97706,A=#ea580c` into tier definitions.
///
/// # Errors
///
/// Returns an error if a pair has no `=` separator.
pub fn parse_tier_list(value: &str) -> Result<Vec<Tier>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            pair.split_once('=')
                .map(|(name, color)| Tier::new(name.trim(), color.trim()))
                .ok_or_else(|| {
                    crate::Error::InvalidConfig(format!(
                        "Tier '{}' must be written as name=color",
                        pair
                    ))
                })
        })
        .collect()
}
