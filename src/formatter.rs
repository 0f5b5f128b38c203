//! Reusable label formatter: one [`ValueFormatter`] per axis or tooltip.
//!
//! Bundles the [`rate_format`] parameters so they are configured once (in code
//! or from presets, see [`crate::config`]) and applied to every data point.

use serde::{Deserialize, Serialize};

use crate::rate::{rate_format, QuantizationEntry, RateEntry};
use crate::value::ValueEntry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueFormatter {
    /// Scale of the mantissas passed to [`format`](Self::format).
    pub scale: i32,
    /// Optional rate conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<RateEntry>,
    /// Optional K/M/B/T quantization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantization: Option<QuantizationEntry>,
    /// Drop insignificant fractional zeros (`2.4560` -> `2.456`).
    #[serde(default)]
    pub strip_trailing_zeros: bool,
}

impl ValueFormatter {
    /// A plain formatter: no rate, no quantization, zeros kept.
    pub fn new(scale: i32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn with_rate(mut self, rate: RateEntry) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn with_quantization(mut self, quantization: QuantizationEntry) -> Self {
        self.quantization = Some(quantization);
        self
    }

    pub fn strip_trailing_zeros(mut self, strip: bool) -> Self {
        self.strip_trailing_zeros = strip;
        self
    }

    /// Format a mantissa expressed at [`scale`](Self::scale).
    ///
    /// ```
    /// # use scaled_value::{QuantizationEntry, ValueFormatter};
    /// let volume = ValueFormatter::new(2)
    ///     .with_quantization(QuantizationEntry::new(10_000, 2))
    ///     .strip_trailing_zeros(true);
    /// assert_eq!(volume.format(1_250_000_00), "1.25M");
    /// assert_eq!(volume.format(9_999_00), "9999");
    /// ```
    pub fn format(&self, result: i64) -> String {
        self.format_scaled(result, self.scale)
    }

    /// Format an entry using its own mantissa and scale.
    pub fn format_entry(&self, entry: &ValueEntry) -> String {
        self.format_scaled(entry.result, entry.scale)
    }

    /// Parse `source` at [`scale`](Self::scale) and format it.
    /// Malformed input renders as zero.
    pub fn format_source(&self, source: &str) -> String {
        self.format_entry(&ValueEntry::from_source(source, self.scale))
    }

    fn format_scaled(&self, result: i64, scale: i32) -> String {
        rate_format(
            result,
            scale,
            self.rate.as_ref(),
            self.quantization.as_ref(),
            self.strip_trailing_zeros,
        )
    }
}
