use std::path::Path;

use anyhow::Context as _;

use crate::{
    config::{flower::FlowerConfig, timing::TimelineConfig},
    foundation::error::{GirasolError, GirasolResult},
    reveal::name::DEFAULT_MAX_NAME_CHARS,
};

/// Everything a reveal session can be configured with, as stored in a JSON settings file.
///
/// Missing fields fall back to their defaults, so `{}` is a valid file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Flower geometry.
    pub flower: FlowerConfig,
    /// Reveal staging.
    pub timeline: TimelineConfig,
    /// Longest name the input boundary accepts, in characters.
    pub max_name_chars: usize,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            flower: FlowerConfig::default(),
            timeline: TimelineConfig::default(),
            max_name_chars: DEFAULT_MAX_NAME_CHARS,
        }
    }
}

impl RevealSettings {
    /// Validate every section.
    pub fn validate(&self) -> GirasolResult<()> {
        self.flower.validate()?;
        self.timeline.validate()?;
        if self.max_name_chars == 0 {
            return Err(GirasolError::validation("max_name_chars must be >= 1"));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON text.
    pub fn from_json_str(s: &str) -> GirasolResult<Self> {
        let settings: Self = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file.
    pub fn from_path(path: &Path) -> GirasolResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
