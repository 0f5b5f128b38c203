use scaled_value::value::*;
use scaled_value::BigDecimal;

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

#[test]
fn parse_decimal_plain_and_scientific() {
    assert_eq!(parse_decimal("12.50").to_plain_string(), "12.50");
    assert_eq!(parse_decimal("-0.001"), dec("-0.001"));
    assert_eq!(parse_decimal("1e2"), BigDecimal::from(100));
    assert_eq!(parse_decimal("+.5"), dec("0.5"));
    assert_eq!(parse_decimal("2."), BigDecimal::from(2));
}

#[test]
fn parse_decimal_malformed_falls_back_to_zero() {
    for bad in ["", "abc", "12.3.4", "--1", "1_000", " 1", "1e", ".", "1e99999"] {
        assert_eq!(parse_decimal(bad), BigDecimal::from(0), "input {:?}", bad);
    }
}

#[test]
fn long_fraction_truncates_instead_of_rounding() {
    let e = ValueEntry::from_source("0.99999999999999999999999999999", 2);
    assert_eq!(e.text, "0.99");
    assert_eq!(e.result, 99);

    let e = ValueEntry::from_source("99999999999999999999.999999999999", 2);
    assert_eq!(e.text, "99999999999999999999.99");
}

#[test]
fn long_integer_is_kept_exactly() {
    let e = ValueEntry::from_source("123456789012345678901234567890", 0);
    assert_eq!(e.text, "123456789012345678901234567890");
    assert_eq!(e.scale, 0);
    // The mantissa keeps its low 64 bits.
    assert_eq!(e.result, 123456789012345678901234567890_i128 as i64);
}

#[test]
fn separators_are_malformed() {
    let e = ValueEntry::from_source("1_000", 0);
    assert_eq!(e.text, "0");
    assert_eq!(e.result, 0);
}

#[test]
fn scale_above_28_is_honoured() {
    let e = ValueEntry::from_source("1.5", 30);
    assert_eq!(e.scale, 30);
    assert_eq!(e.text, format!("1.5{}", "0".repeat(29)));
}

#[test]
fn build_from_source_truncates_toward_zero() {
    let mut e = ValueEntry::new("12.3456");
    build_scale_value(&mut e, 2);
    assert_eq!(e.scale, 2);
    assert_eq!(e.text, "12.34");
    assert_eq!(e.result, 1234);
    assert!((e.value - 12.34).abs() < 1e-9);
    assert_eq!(e.source, "12.3456", "source is kept");

    let e = ValueEntry::from_source("-12.349", 2);
    assert_eq!(e.text, "-12.34");
    assert_eq!(e.result, -1234);
}

#[test]
fn build_from_source_pads_to_scale() {
    let e = ValueEntry::from_source("5", 3);
    assert_eq!(e.text, "5.000");
    assert_eq!(e.result, 5_000);
}

#[test]
fn build_from_source_malformed_is_zero() {
    let e = ValueEntry::from_source("n/a", 2);
    assert_eq!(e.text, "0.00");
    assert_eq!(e.result, 0);
    assert_eq!(e.value, 0.0);
    assert_eq!(e.source, "n/a");
}

#[test]
fn truncated_negative_to_zero_has_no_sign() {
    let e = ValueEntry::from_source("-0.001", 2);
    assert_eq!(e.text, "0.00");
    assert_eq!(e.result, 0);
}

#[test]
fn scientific_source() {
    let e = ValueEntry::from_source("1.5e3", 1);
    assert_eq!(e.text, "1500.0");
    assert_eq!(e.result, 15_000);
}

#[test]
fn negative_scale_drops_whole_digits() {
    let e = ValueEntry::from_source("1234.9", -2);
    assert_eq!(e.scale, -2);
    assert_eq!(e.result, 12);
    assert_eq!(e.text, "1200");
}

#[test]
fn build_from_result_canonicalizes_source() {
    let mut e = ValueEntry::new("garbage");
    build_scale_value_from_result(&mut e, 1234, 2);
    assert_eq!(e.scale, 2);
    assert_eq!(e.text, "12.34");
    assert_eq!(e.source, "12.34");
    assert_eq!(e.result, 1234);
    assert!((e.value - 12.34).abs() < 1e-9);
}

#[test]
fn build_from_result_overwrites_previous_state() {
    let mut e = ValueEntry::from_source("99.99", 2);
    build_scale_value_from_result(&mut e, -7, 1);
    assert_eq!(e, scale_value(-7, 1));
    assert_eq!(e.text, "-0.7");
}

#[test]
fn text_round_trips_through_parser() {
    let cases = [
        (1234, 2),
        (-1234, 2),
        (0, 3),
        (5, 6),
        (123_456_789, 4),
        (-1, 12),
        (42, 0),
    ];
    for (result, scale) in cases {
        let built = scale_value(result, scale);
        let reparsed = ValueEntry::from_source(built.source.clone(), scale);
        assert_eq!(reparsed.result, result, "({}, {})", result, scale);
        assert_eq!(reparsed.scale, scale);
        assert_eq!(reparsed.text, built.text);
    }
}

#[test]
fn display_prints_text() {
    let e = ValueEntry::from_result(-250, 2);
    assert_eq!(e.to_string(), "-2.50");
}
