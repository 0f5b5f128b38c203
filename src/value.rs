//! Normalized value records built from decimal strings or scaled mantissas.
//!
//! A [`ValueEntry`] is what a presentation layer keeps per data point: the
//! exact mantissa for arithmetic, the exact text for labels, and a lossy
//! `f64` for placing the point on screen.

use std::str::FromStr;

use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::arithmetic::build_value;
use crate::text::build_text;

/// One normalized value.
///
/// `text` and `result` always describe the same number at `scale`
/// (`text == build_text(result, scale, false)` up to padding limits).
/// `value` is derived and may be off in the last bits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueEntry {
    /// Decimal string as received, or the canonical text once built from a mantissa.
    pub source: String,
    /// Number of fractional digits.
    pub scale: i32,
    /// Exact decimal rendering.
    pub text: String,
    /// Approximate value, for layout and plotting only.
    pub value: f64,
    /// Integer mantissa: the value is `result / 10^scale`.
    pub result: i64,
}

impl ValueEntry {
    /// An entry holding only its source text; call [`build_scale_value`] to fill the rest.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Parse `source` and normalize it to `scale` fractional digits.
    ///
    /// ```
    /// # use scaled_value::ValueEntry;
    /// let e = ValueEntry::from_source("12.3456", 2);
    /// assert_eq!(e.text, "12.34");
    /// assert_eq!(e.result, 1234);
    /// ```
    pub fn from_source(source: impl Into<String>, scale: i32) -> Self {
        let mut entry = Self::new(source);
        build_scale_value(&mut entry, scale);
        entry
    }

    /// Build an entry straight from a mantissa. Same as [`scale_value`].
    pub fn from_result(result: i64, scale: i32) -> Self {
        scale_value(result, scale)
    }
}

impl std::fmt::Display for ValueEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Exponents beyond this magnitude are rejected rather than expanded.
const MAX_EXPONENT: i64 = 4_096;

/// Parse an arbitrary-precision decimal.
///
/// Accepts an optional sign, digits with an optional decimal point and an
/// optional `e`/`E` exponent (`"-12.50"`, `".5"`, `"1.5e3"`). Anything else,
/// including the empty string, surrounding whitespace, digit separators and
/// exponents beyond ±4096, is not an error: it deliberately falls back to zero
/// so a bad data point renders as `0` instead of breaking the chart. The
/// fallback is reported at `debug` level.
///
/// ```
/// # use scaled_value::value::parse_decimal;
/// # use bigdecimal::{BigDecimal, Zero};
/// assert_eq!(parse_decimal("12.5").to_plain_string(), "12.5");
/// assert!(parse_decimal("not a number").is_zero());
/// ```
pub fn parse_decimal(source: &str) -> BigDecimal {
    if !is_decimal_literal(source) {
        tracing::debug!(source, "malformed decimal, using zero");
        return BigDecimal::zero();
    }
    match BigDecimal::from_str(source) {
        Ok(decimal) => decimal,
        Err(err) => {
            tracing::debug!(source, %err, "malformed decimal, using zero");
            BigDecimal::zero()
        }
    }
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let s = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let (significand, exponent) = match s.find(&['e', 'E'][..]) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = significand.split_once('.').unwrap_or((significand, ""));
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(&['+', '-'][..]).unwrap_or(exp);
            !digits.is_empty()
                && all_digits(digits)
                && exp.parse::<i64>().is_ok_and(|e| e.abs() <= MAX_EXPONENT)
        }
    }
}

/// Normalize `entry.source` to `scale` fractional digits, truncating toward zero.
///
/// Overwrites `scale`, `text`, `value` and `result`; `source` is kept as is.
/// Malformed sources produce a zero entry (see [`parse_decimal`]).
///
/// Any scale is honoured. Negative scales drop whole digits: `"1234"` at
/// scale `-2` has mantissa `12` and text `"1200"`. Mantissas beyond the `i64`
/// range keep their low 64 bits; `text` stays exact.
pub fn build_scale_value(entry: &mut ValueEntry, scale: i32) {
    let truncated =
        parse_decimal(&entry.source).with_scale_round(i64::from(scale), RoundingMode::Down);
    let (mantissa, _) = truncated.as_bigint_and_exponent();

    entry.scale = scale;
    entry.text = truncated.to_plain_string();
    entry.value = truncated.to_f64().unwrap_or_default();
    entry.result = low_i64(&mantissa);
}

/// Build `entry` from an already scaled mantissa, skipping decimal parsing.
///
/// `entry.source` is replaced with the canonical text, so a later
/// [`build_scale_value`] on the same entry reproduces the same mantissa.
pub fn build_scale_value_from_result(entry: &mut ValueEntry, result: i64, scale: i32) {
    entry.scale = scale;
    entry.text = build_text(result, scale, false);
    entry.value = build_value(result, scale);
    entry.result = result;
    entry.source = entry.text.clone();
}

/// A fresh entry for `result` at `scale`.
///
/// ```
/// # use scaled_value::value::scale_value;
/// let e = scale_value(-5, 3);
/// assert_eq!(e.text, "-0.005");
/// assert_eq!(e.source, "-0.005");
/// ```
pub fn scale_value(result: i64, scale: i32) -> ValueEntry {
    let mut entry = ValueEntry::default();
    build_scale_value_from_result(&mut entry, result, scale);
    entry
}

/// Two's-complement low 64 bits of `n`.
fn low_i64(n: &BigInt) -> i64 {
    let (sign, digits) = n.to_u64_digits();
    let low = digits.first().copied().unwrap_or(0) as i64;
    match sign {
        Sign::Minus => low.wrapping_neg(),
        _ => low,
    }
}
