//! Errors raised while reading or writing formatter presets.
//!
//! Formatting itself never fails; only the configuration surface does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("preset {preset:?}: {field} scale {scale} is outside -18..=18")]
    InvalidScale {
        preset: String,
        field: &'static str,
        scale: i32,
    },
}
