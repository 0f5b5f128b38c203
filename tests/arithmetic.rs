use scaled_value::arithmetic::*;

#[test]
fn pow10_small_exponents_are_exact() {
    assert_eq!(pow10(0), 1.0);
    assert_eq!(pow10(2), 100.0);
    assert_eq!(pow10(15), 1e15);
}

#[test]
fn pow10_exact_covers_i64_range_only() {
    assert_eq!(pow10_exact(0), Some(1));
    assert_eq!(pow10_exact(12), Some(1_000_000_000_000));
    assert_eq!(pow10_exact(18), Some(1_000_000_000_000_000_000));
    assert_eq!(pow10_exact(19), None);
    assert_eq!(pow10_exact(-1), None);
}

#[test]
fn scale_multiply_divides_out_one_scale() {
    // 2.00 * 3.00 = 6.00
    assert_eq!(scale_multiply(200, 300, 2), 600);
    assert_eq!(scale_multiply(200, 300, 0), 60_000);
    assert_eq!(scale_multiply(200, 300, -3), 60_000);
}

#[test]
fn scale_multiply_truncates_toward_zero() {
    // 0.5 * 0.3 = 0.15 -> 0.1 at scale 1
    assert_eq!(scale_multiply(5, 3, 1), 1);
    assert_eq!(scale_multiply(-5, 3, 1), -1);
}

#[test]
fn scale_multiply_uses_wide_intermediate() {
    // The raw product overflows i64, the scaled result does not.
    assert_eq!(scale_multiply(i64::MAX, 10, 1), i64::MAX);
    assert_eq!(
        scale_multiply(1_000_000_000_000, 1_000_000_000_000, 12),
        1_000_000_000_000
    );
}

#[test]
fn scale_divide_keeps_scale() {
    assert_eq!(scale_divide(200, 100, 2), 200);
    // 1 / 3 at scale 2
    assert_eq!(scale_divide(1, 3, 2), 33);
}

#[test]
fn scale_divide_unscaled_truncates_toward_zero() {
    assert_eq!(scale_divide(7, 2, 0), 3);
    assert_eq!(scale_divide(-7, 2, 0), -3);
}

#[test]
#[should_panic(expected = "zero divisor")]
fn scale_divide_by_zero_panics() {
    scale_divide(1, 0, 2);
}

#[test]
fn build_value_approximates_decimal() {
    assert!((build_value(1234, 2) - 12.34).abs() < 1e-9);
    assert_eq!(build_value(1234, 0), 1234.0);
    assert_eq!(build_value(1234, -2), 1234.0);
    assert!((build_value(-5, 3) + 0.005).abs() < 1e-12);
}

#[test]
fn build_result_truncates() {
    assert_eq!(build_result(12.34, 2), 1234);
    assert_eq!(build_result(12.9, 0), 12);
    assert_eq!(build_result(-12.9, 0), -12);
    assert_eq!(build_result(-1.239, 2), -123);
}

#[test]
fn build_result_non_finite_is_zero() {
    assert_eq!(build_result(f64::NAN, 2), 0);
    assert_eq!(build_result(f64::INFINITY, 0), 0);
}
