//! Scale-aware arithmetic on integer mantissas.
//!
//! A mantissa `m` at scale `s` encodes the decimal value `m / 10^s`. The helpers in
//! this module multiply, divide and convert such mantissas without going through
//! floating point, except where a floating result is the whole point
//! ([`build_value`]) or the input already is one ([`build_result`]).

/// Exact powers of ten for every exponent that fits an `i64`.
const POW10: [i64; 19] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

/// `10^n` as a float.
///
/// Exact for the exponents charts actually use (0..=15); larger or negative
/// exponents are an approximation.
///
/// ```
/// # use scaled_value::arithmetic::pow10;
/// assert_eq!(pow10(3), 1_000.0);
/// ```
pub fn pow10(n: i32) -> f64 {
    10f64.powi(n)
}

/// `10^n` as an exact integer, or `None` when `n` is negative or the power
/// does not fit an `i64` (`n > 18`).
///
/// ```
/// # use scaled_value::arithmetic::pow10_exact;
/// assert_eq!(pow10_exact(6), Some(1_000_000));
/// assert_eq!(pow10_exact(19), None);
/// ```
pub fn pow10_exact(n: i32) -> Option<i64> {
    usize::try_from(n).ok().and_then(|i| POW10.get(i).copied())
}

/// `10^n` in 128 bits, `None` past `10^38`.
fn pow10_wide(n: i32) -> Option<i128> {
    u32::try_from(n).ok().and_then(|n| 10i128.checked_pow(n))
}

/// Clamp a wide intermediate back into the mantissa domain.
fn saturate(v: i128) -> i64 {
    i64::try_from(v).unwrap_or(if v < 0 { i64::MIN } else { i64::MAX })
}

/// Fixed-point multiply: `a * b / 10^scale` when `scale > 0`, else `a * b`.
///
/// The product is formed in 128 bits and truncated toward zero, so only the
/// final result has to fit the mantissa domain; results outside it saturate.
///
/// ```
/// # use scaled_value::arithmetic::scale_multiply;
/// // 2.00 * 3.00 = 6.00
/// assert_eq!(scale_multiply(200, 300, 2), 600);
/// ```
pub fn scale_multiply(a: i64, b: i64, scale: i32) -> i64 {
    let product = i128::from(a) * i128::from(b);
    if scale <= 0 {
        return saturate(product);
    }
    match pow10_wide(scale) {
        Some(p) => saturate(product / p),
        // |product| < 10^38, so the quotient truncates to zero.
        None => 0,
    }
}

/// Fixed-point divide: `a * 10^scale / b` when `scale > 0`, else `a / b`.
///
/// Truncates toward zero.
///
/// # Panics
/// Panics when `b == 0`. A zero divisor is a caller bug, never input data.
///
/// ```
/// # use scaled_value::arithmetic::scale_divide;
/// assert_eq!(scale_divide(200, 100, 2), 200);
/// ```
pub fn scale_divide(a: i64, b: i64, scale: i32) -> i64 {
    assert!(b != 0, "scale_divide called with a zero divisor");
    if scale <= 0 {
        return saturate(i128::from(a) / i128::from(b));
    }
    match pow10_wide(scale).and_then(|p| i128::from(a).checked_mul(p)) {
        Some(n) => saturate(n / i128::from(b)),
        None => saturate((a as f64 * pow10(scale) / b as f64) as i128),
    }
}

/// Approximate floating value of `result` at `scale`, for layout and plotting.
///
/// Never feed this back into exact arithmetic.
///
/// ```
/// # use scaled_value::arithmetic::build_value;
/// assert!((build_value(1234, 2) - 12.34).abs() < 1e-9);
/// ```
pub fn build_value(result: i64, scale: i32) -> f64 {
    if scale > 0 {
        result as f64 / pow10(scale)
    } else {
        result as f64
    }
}

/// Lossy inverse of [`build_value`]: `trunc(value * 10^scale)`.
///
/// Floating inputs that are not exactly representable can come back one unit
/// short (`0.29 * 100` is `28.999...`), so this does not always round-trip
/// with [`build_value`]. Non-finite values map to `0`; out-of-range values
/// saturate.
pub fn build_result(value: f64, scale: i32) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    if scale > 0 {
        (value * pow10(scale)).trunc() as i64
    } else {
        value.trunc() as i64
    }
}
