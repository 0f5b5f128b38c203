//! Named formatter presets, stored as YAML or JSON.
//!
//! A presentation layer typically keeps a handful of formatters ("price",
//! "volume", "percent", ...) in one document and hands its text to
//! [`FormatPresets::from_yaml_str`] or [`FormatPresets::from_json_str`]:
//!
//! ```yaml
//! price:
//!   scale: 4
//!   strip_trailing_zeros: true
//! volume:
//!   scale: 2
//!   quantization: { min_format_num: 10000, scale: 2 }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::formatter::ValueFormatter;

/// Scales must keep `10^scale` representable as an exact `i64`.
const MAX_ABS_SCALE: i32 = 18;

/// Formatters keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatPresets {
    pub presets: BTreeMap<String, ValueFormatter>,
}

impl FormatPresets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ValueFormatter> {
        self.presets.get(name)
    }

    /// Add or replace a preset, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        formatter: ValueFormatter,
    ) -> Option<ValueFormatter> {
        self.presets.insert(name.into(), formatter)
    }

    /// Check that every scale stays within `-18..=18`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, f) in &self.presets {
            let scales = [
                Some(("scale", f.scale)),
                f.rate.as_ref().map(|r| ("rate.scale", r.scale)),
                f.quantization.as_ref().map(|q| ("quantization.scale", q.scale)),
            ];
            for (field, scale) in scales.into_iter().flatten() {
                if !(-MAX_ABS_SCALE..=MAX_ABS_SCALE).contains(&scale) {
                    return Err(ConfigError::InvalidScale {
                        preset: name.clone(),
                        field,
                        scale,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let presets: FormatPresets = serde_yaml::from_str(s)?;
        presets.validate()?;
        Ok(presets)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let presets: FormatPresets = serde_json::from_str(s)?;
        presets.validate()?;
        Ok(presets)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
