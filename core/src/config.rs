//! Visualizer configuration
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::completion::ResultKeys;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Sizing of rendered elements; never affects what is emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Full,
}

/// Playback and presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Auto-advance interval for a freshly loaded trace (ms)
    pub default_speed_ms: u64,

    /// Fastest allowed interval (ms)
    pub min_speed_ms: u64,

    /// Slowest allowed interval (ms)
    pub max_speed_ms: u64,

    /// Element sizing
    pub density: Density,

    /// Offer the custom input panel
    pub show_custom_input: bool,

    /// How many annotations the step info panel shows
    pub annotation_badge_limit: usize,

    /// Primary result key per visualization type for the completion overlay
    pub result_keys: ResultKeys,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            default_speed_ms: 1500,
            min_speed_ms: 100,
            max_speed_ms: 5000,
            density: Density::Full,
            show_custom_input: true,
            annotation_badge_limit: 3,
            result_keys: ResultKeys::default(),
        }
    }
}

impl VisualizerConfig {
    /// Loads a JSON configuration file; absent fields keep their defaults
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: VisualizerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_speed_ms == 0 {
            return Err(ConfigError::Invalid("min_speed_ms must be positive".into()));
        }
        if self.min_speed_ms > self.max_speed_ms {
            return Err(ConfigError::Invalid(format!(
                "min_speed_ms ({}) exceeds max_speed_ms ({})",
                self.min_speed_ms, self.max_speed_ms
            )));
        }
        if !(self.min_speed_ms..=self.max_speed_ms).contains(&self.default_speed_ms) {
            return Err(ConfigError::Invalid(format!(
                "default_speed_ms ({}) outside [{}, {}]",
                self.default_speed_ms, self.min_speed_ms, self.max_speed_ms
            )));
        }
        Ok(())
    }

    pub fn default_speed(&self) -> Duration {
        Duration::from_millis(self.default_speed_ms)
    }

    /// Clamps a requested interval into the configured range
    pub fn clamp_speed_ms(&self, ms: u64) -> u64 {
        ms.max(self.min_speed_ms).min(self.max_speed_ms)
    }
}
