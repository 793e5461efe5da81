use super::*;

#[test]
fn test_parse_magnitude_millions_with_decimal_comma() {
    assert_eq!(parse_magnitude(Some("30,3M")), 30_300_000.0);
    assert_eq!(parse_magnitude(Some("1.5M")), 1_500_000.0);
}

#[test]
fn test_parse_magnitude_thousands() {
    assert_eq!(parse_magnitude(Some("500K")), 500_000.0);
    assert_eq!(parse_magnitude(Some("12,5K")), 12_500.0);
}

#[test]
fn test_parse_magnitude_plain_number() {
    assert_eq!(parse_magnitude(Some("750")), 750.0);
    assert_eq!(parse_magnitude(Some("42,25")), 42.25);
}

#[test]
fn test_parse_magnitude_strips_whitespace() {
    assert_eq!(parse_magnitude(Some("  30,3 M ")), 30_300_000.0);
    assert_eq!(parse_magnitude(Some("1 200K")), 1_200_000.0);
}

#[test]
fn test_parse_magnitude_missing_and_blank() {
    assert_eq!(parse_magnitude(None), 0.0);
    assert_eq!(parse_magnitude(Some("")), 0.0);
    assert_eq!(parse_magnitude(Some("   ")), 0.0);
}

#[test]
fn test_parse_magnitude_unparseable_falls_back_to_zero() {
    assert_eq!(parse_magnitude(Some("n/a")), 0.0);
    assert_eq!(parse_magnitude(Some("M")), 0.0);
    assert_eq!(parse_magnitude(Some("inf")), 0.0);
    assert_eq!(parse_magnitude(Some("1,2B")), 0.0);
}

#[test]
fn test_try_parse_magnitude_reports_bad_input() {
    match try_parse_magnitude("12x") {
        Err(StatsError::InvalidMagnitude { input }) => assert_eq!(input, "12x"),
        other => panic!("Expected InvalidMagnitude, got {:?}", other),
    }
    assert!(try_parse_magnitude("").is_err());
    assert!(try_parse_magnitude("NaN").is_err());
}

#[test]
fn test_try_parse_magnitude_only_first_comma_is_decimal() {
    // "1,234,5" -> "1.234,5" which is not a number
    assert!(try_parse_magnitude("1,234,5").is_err());
}

#[test]
fn test_format_magnitude() {
    assert_eq!(format_magnitude(30_300_000.0), "30.3M");
    assert_eq!(format_magnitude(1_000_000.0), "1.0M");
    assert_eq!(format_magnitude(500_000.0), "500.0K");
    assert_eq!(format_magnitude(1_000.0), "1.0K");
    assert_eq!(format_magnitude(750.0), "750");
    assert_eq!(format_magnitude(0.0), "0");
}

#[test]
fn test_format_then_parse_keeps_one_decimal() {
    let parsed = parse_magnitude(Some(&format_magnitude(11_666_666.7)));
    assert_eq!(parsed, 11_700_000.0);
}

#[test]
fn test_format_magnitude_rounds_halves_up() {
    assert_eq!(format_magnitude(7_250_000.0), "7.3M");
    assert_eq!(format_magnitude(12_250.0), "12.3K");
    assert_eq!(format_magnitude(2.5), "3");
    assert_eq!(format_magnitude(999_950.0), "1000.0K");
}
