//! Display-safe number formatting.
//!
//! Every figure headed for a table or chart label goes through [`safe_fixed`],
//! so a half-recorded match (null goals or possession) renders as `"N/A"`
//! instead of breaking the formatting.


/// Sentinel shown in place of a missing or invalid number.
pub const NOT_AVAILABLE: &str = "N/A";

/// Decimal places used when a caller has no preference.
pub const DEFAULT_DIGITS: usize = 2;

/// Enough fractional digits to print any finite f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Render `value` with `digits` decimal places, rounding exact halves away from zero.
///
/// `1.125` gives `"1.13"` where `{:.2}` gives `"1.12"`. Rounding is decided on
/// the exact binary value, so `1.005` (stored just below the half) gives `"1.00"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    // past the exact expansion there are no halves left to break
    if !value.is_finite() || digits >= EXACT_FRACTION_DIGITS {
        return format!("{:.*}", digits, value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&d| d >= b'5');

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|&b| b as char));
    }
    out
}

/// Format `value` with exactly `digits` decimal places, or [`NOT_AVAILABLE`]
/// when it is absent, NaN or infinite.
///
/// ```rust
/// use league_stats::stats::numeric::safe_fixed;
///
/// assert_eq!(safe_fixed(Some(3.14159), 2), "3.14");
/// assert_eq!(safe_fixed(None, 2), "N/A");
/// assert_eq!(safe_fixed(Some(f64::NAN), 2), "N/A");
/// ```
pub fn safe_fixed(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) if v.is_finite() => to_fixed(v, digits),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// [`safe_fixed`] with a trailing `%`, or the bare sentinel.
pub fn format_percentage(value: Option<f64>, digits: usize) -> String {
    let formatted = safe_fixed(value, digits);
    if formatted == NOT_AVAILABLE {
        formatted
    } else {
        format!("{}%", formatted)
    }
}

/// Collapse NaN and infinities to zero for values that feed chart geometry.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round to `digits` places through [`safe_fixed`]; `None` when not displayable.
pub fn round_display(value: Option<f64>, digits: usize) -> Option<f64> {
    safe_fixed(value, digits).parse().ok()
}
