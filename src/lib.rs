//! scaled-value crate root: re-exports and module wiring.
//!
//! Turns integer mantissas paired with a scale (number of fractional digits)
//! into exact, human-readable labels for chart axes, tooltips and data points.
//!
//! Modules, bottom-up:
//! - `arithmetic`: powers of ten and scale-aware multiply/divide
//! - `text`: exact mantissa-to-decimal rendering
//! - `value`: decimal parsing and normalized [`ValueEntry`] records
//! - `rate`: rate conversion and K/M/B/T quantization (`rate_format`)
//! - `formatter`: reusable [`ValueFormatter`] bundling the above
//! - `config`: named formatter presets stored as YAML/JSON
//!
//! All formatting functions are pure; the only shared state is a set of
//! read-only lookup tables, so everything can be called from any thread.

pub mod arithmetic;
pub mod config;
pub mod error;
pub mod formatter;
pub mod rate;
pub mod text;
pub mod value;

// Public re-exports for a compact external API
pub use bigdecimal::BigDecimal;
pub use arithmetic::{build_result, build_value, pow10, pow10_exact, scale_divide, scale_multiply};
pub use config::FormatPresets;
pub use error::ConfigError;
pub use formatter::ValueFormatter;
pub use rate::{rate_format, QuantizationEntry, RateEntry, MAGNITUDES};
pub use text::{build_text, ZERO_PADDING};
pub use value::{
    build_scale_value, build_scale_value_from_result, parse_decimal, scale_value, ValueEntry,
};
