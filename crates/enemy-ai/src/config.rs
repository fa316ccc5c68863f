//! Per-archetype tuning loaded from RON files.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors surfaced while loading archetype tuning.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read archetype config")]
    Io(#[from] std::io::Error),

    #[error("failed to parse archetype config")]
    Parse(#[from] ron::error::SpannedError),
}

/// Static base utilities for the four battle tactics.
///
/// These are the pre-weight scores; the difficulty system multiplies them
/// at runtime through the weight table.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct BaseUtilities {
    pub aggressive: f32,
    pub keep_distance: f32,
    pub skill_oriented: f32,
    pub evading: f32,
}

impl Default for BaseUtilities {
    fn default() -> Self {
        Self {
            aggressive: 1.8,
            keep_distance: 0.3,
            skill_oriented: 1.0,
            evading: 1.4,
        }
    }
}

/// Tuning knobs for one enemy archetype.
///
/// All fields default to the shipped balance values, so a config file only
/// needs to name what it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArchetypeConfig {
    /// Seconds between skill uses.
    pub skill_cooldown_secs: f32,
    /// Seconds between evade dashes.
    pub evade_cooldown_secs: f32,
    /// Health fraction below which the flee branch takes over. Enforced by
    /// the external critically-wounded condition, recorded here so tuning
    /// files keep the whole archetype in one place.
    pub flee_health_threshold: f32,
    /// Pre-weight scores for the battle tactics.
    pub base_utilities: BaseUtilities,
}

impl Default for ArchetypeConfig {
    fn default() -> Self {
        Self {
            skill_cooldown_secs: 5.0,
            evade_cooldown_secs: 3.0,
            flee_health_threshold: 0.25,
            base_utilities: BaseUtilities::default(),
        }
    }
}

impl ArchetypeConfig {
    /// Parses a config from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Loads a config from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Skill cooldown as a duration.
    pub fn skill_cooldown(&self) -> Duration {
        Duration::from_secs_f32(self.skill_cooldown_secs)
    }

    /// Evade cooldown as a duration.
    pub fn evade_cooldown(&self) -> Duration {
        Duration::from_secs_f32(self.evade_cooldown_secs)
    }
}
