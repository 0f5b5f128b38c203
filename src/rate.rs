//! Display transforms on top of a scaled mantissa: rate conversion and
//! K/M/B/T magnitude quantization.
//!
//! Both transforms are optional and configured by the caller. [`rate_format`]
//! applies them in a fixed order, aligns the mantissa to the resulting display
//! scale and hands it to [`build_text`].

use serde::{Deserialize, Serialize};

use crate::arithmetic::{pow10, pow10_exact, scale_divide, scale_multiply};
use crate::text::build_text;

/// Magnitude thresholds and their unit labels, smallest first.
pub const MAGNITUDES: [(i64, &str); 4] = [
    (1_000, "K"),
    (1_000_000, "M"),
    (1_000_000_000, "B"),
    (1_000_000_000_000, "T"),
];

fn default_active() -> bool {
    true
}

/// Rate conversion: multiply by `rate`, show at `scale`, prefix with `sign`.
///
/// `rate == 0.0` is a valid conversion; use `active` to switch one off
/// without dropping its settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Multiplier applied to the value.
    pub rate: f64,
    /// Display scale after conversion.
    pub scale: i32,
    /// Prefix for the converted label, e.g. `"+"` or `"$"`.
    #[serde(default)]
    pub sign: String,
    /// Whether the conversion is applied at all.
    #[serde(default = "default_active")]
    pub active: bool,
}

impl RateEntry {
    pub fn new(rate: f64, scale: i32, sign: impl Into<String>) -> Self {
        Self {
            rate,
            scale,
            sign: sign.into(),
            active: true,
        }
    }

    pub fn is_set(&self) -> bool {
        self.active
    }
}

/// Magnitude quantization: values above `min_format_num` collapse to a short
/// form with a unit suffix, shown at `scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantizationEntry {
    /// Values must exceed this (in display units) before quantization is tried.
    pub min_format_num: i64,
    /// Display scale once quantized.
    pub scale: i32,
}

impl QuantizationEntry {
    pub fn new(min_format_num: i64, scale: i32) -> Self {
        Self {
            min_format_num,
            scale,
        }
    }
}

/// Format `result` at `scale` with optional rate conversion and quantization.
///
/// Steps, in order:
/// 1. With an active `rate`, the value is multiplied by `rate.rate`; the
///    display scale becomes `rate.scale` and the label gets `rate.sign` in front.
/// 2. With a `quantization` and a value above `min_format_num`, the display
///    scale becomes `quantization.scale`. The value is divided by the largest
///    magnitude it reaches (T, B, M, K) and that unit is appended. A value
///    below 1 000 passes the gate without getting a unit, but still takes the
///    quantization scale.
/// 3. The mantissa is shifted from `scale` to the display scale, truncating.
/// 4. The label is `sign + build_text(..) + unit`.
///
/// Thresholds in step 2 are compared against the rate-converted value.
///
/// The rate mantissa is `trunc(rate.rate * 10^scale)` for any `scale`, so a
/// negative `scale` turns small rates into `0`. Quantization thresholds treat
/// negative `scale`s as `0`, which keeps every threshold non-zero.
///
/// ```
/// # use scaled_value::rate::{rate_format, QuantizationEntry, RateEntry};
/// assert_eq!(rate_format(1234, 2, None, None, false), "12.34");
///
/// let q = QuantizationEntry::new(0, 2);
/// assert_eq!(rate_format(2_000_000, 0, None, Some(&q), false), "2.00M");
///
/// let pct = RateEntry::new(100.0, 2, "+");
/// assert_eq!(rate_format(1234, 4, Some(&pct), None, false), "+12.34");
/// ```
pub fn rate_format(
    result: i64,
    scale: i32,
    rate: Option<&RateEntry>,
    quantization: Option<&QuantizationEntry>,
    strip_trailing_zeros: bool,
) -> String {
    let scale_pow = i128::from(pow10_exact(scale.max(0)).unwrap_or(i64::MAX));
    let mut result = result;
    let mut value_scale = scale;
    let mut sign = "";
    let mut unit = "";

    if let Some(rate) = rate.filter(|r| r.is_set()) {
        let rate_result = (rate.rate * pow10(scale)) as i64;
        result = scale_multiply(result, rate_result, scale);
        value_scale = rate.scale;
        sign = rate.sign.as_str();
    }

    if let Some(q) = quantization {
        if i128::from(result) > i128::from(q.min_format_num) * scale_pow {
            value_scale = q.scale;
            let reached = MAGNITUDES
                .iter()
                .rev()
                .map(|&(threshold, label)| (i128::from(threshold) * scale_pow, label))
                .find(|&(threshold, _)| i128::from(result) >= threshold);
            if let Some((threshold, label)) = reached {
                // `result` reached it, so the threshold fits an i64.
                result = scale_divide(result, threshold as i64, scale);
                unit = label;
            }
        }
    }

    result = rescale(result, scale, value_scale);
    tracing::trace!(result, value_scale, sign, unit, "rate_format");

    format!(
        "{sign}{}{unit}",
        build_text(result, value_scale, strip_trailing_zeros)
    )
}

/// Shift a mantissa from scale `from` to scale `to`, truncating when digits
/// are dropped and saturating when they are added.
fn rescale(result: i64, from: i32, to: i32) -> i64 {
    let diff = i64::from(from) - i64::from(to);
    let step = i32::try_from(diff.abs()).ok().and_then(pow10_exact);
    match (diff.signum(), step) {
        (0, _) => result,
        (1, Some(p)) => result / p,
        (1, None) => 0,
        (_, Some(p)) => result.saturating_mul(p),
        (_, None) if result == 0 => 0,
        (_, None) if result < 0 => i64::MIN,
        (_, None) => i64::MAX,
    }
}
