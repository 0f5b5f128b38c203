//! Exact decimal rendering of integer mantissas.
//!
//! [`build_text`] never touches floating point: the mantissa's digits are
//! printed as an integer and the decimal point is placed by string surgery,
//! so `12.34` stays `12.34` no matter how badly `f64` would represent it.

use once_cell::sync::Lazy;

/// Largest amount of left padding [`build_text`] will insert.
pub const MAX_ZERO_PADDING: usize = 12;

/// Left-padding prefixes: entry `n` is `"0."` followed by `n` zeros.
///
/// Scales that would need more padding than the last entry reuse it.
pub static ZERO_PADDING: Lazy<Vec<String>> = Lazy::new(|| {
    (0..=MAX_ZERO_PADDING)
        .map(|n| format!("0.{}", "0".repeat(n)))
        .collect()
});

fn zero_padding(count: usize) -> &'static str {
    &ZERO_PADDING[count.min(MAX_ZERO_PADDING)]
}

/// Format `result` as a decimal with `scale` fractional digits.
///
/// * `scale <= 0` prints the plain integer.
/// * Mantissas with fewer digits than `scale` are left-padded with `0.` and
///   zeros; the sign stays in front of the padding.
/// * With `strip_trailing_zeros`, insignificant fractional zeros are removed,
///   and so is a decimal point left dangling at the end.
///
/// ```
/// # use scaled_value::text::build_text;
/// assert_eq!(build_text(1234, 2, false), "12.34");
/// assert_eq!(build_text(1234, 6, false), "0.001234");
/// assert_eq!(build_text(-1234, 2, false), "-12.34");
/// assert_eq!(build_text(1230, 2, true), "12.3");
/// ```
pub fn build_text(result: i64, scale: i32, strip_trailing_zeros: bool) -> String {
    if scale <= 0 {
        return result.to_string();
    }
    // `scale` is positive here, so the cast cannot wrap.
    let scale = scale as usize;

    let mut text = result.to_string();
    let offset = usize::from(result < 0);
    let length = text.len() - offset;

    if scale < length {
        text.insert(offset + length - scale, '.');
    } else {
        text.insert_str(offset, zero_padding(scale - length));
    }

    if strip_trailing_zeros {
        strip_fraction_zeros(&mut text);
    }
    text
}

/// Trim trailing `'0'`s after the decimal point, then the point itself if it
/// ends up last. Integers (no `'.'`) are left untouched.
fn strip_fraction_zeros(text: &mut String) {
    if !text.contains('.') {
        return;
    }
    let kept = text.trim_end_matches('0').len();
    text.truncate(kept);
    if text.ends_with('.') {
        text.pop();
    }
}
