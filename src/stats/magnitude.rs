//! Conversion between abbreviated magnitude strings ("30,3M", "500K") and numbers.

use super::numeric::to_fixed;
use crate::error::{Result, StatsError};

#[cfg(test)]
mod tests;

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Strict parse of a magnitude string.
///
/// All whitespace is stripped, the first comma is read as a decimal point, and
/// a trailing `M` or `K` scales the number. Anything that does not reduce to a
/// finite decimal is an [`StatsError::InvalidMagnitude`].
pub fn try_parse_magnitude(text: &str) -> Result<f64> {
    let clean: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let clean = clean.replacen(',', ".", 1);

    let (number, multiplier) = if let Some(n) = clean.strip_suffix('M') {
        (n, MILLION)
    } else if let Some(n) = clean.strip_suffix('K') {
        (n, THOUSAND)
    } else {
        (clean.as_str(), 1.0)
    };

    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v * multiplier)
        .ok_or_else(|| StatsError::InvalidMagnitude {
            input: text.to_string(),
        })
}

/// Lenient parse used by the aggregators: missing, blank or unparseable input is `0`.
///
/// A value that is present but unparseable is logged, since it shows up
/// downstream as a zero-valued team.
pub fn parse_magnitude(text: Option<&str>) -> f64 {
    match text {
        Some(t) if !t.trim().is_empty() => try_parse_magnitude(t).unwrap_or_else(|e| {
            log::warn!("{}; treating as 0", e);
            0.0
        }),
        _ => 0.0,
    }
}

/// Render a number back into abbreviated form: `30.3M`, `12.5K`, or a plain integer.
///
/// Not an exact inverse of [`parse_magnitude`]; one decimal of precision is kept.
pub fn format_magnitude(value: f64) -> String {
    if value >= MILLION {
        format!("{}M", to_fixed(value / MILLION, 1))
    } else if value >= THOUSAND {
        format!("{}K", to_fixed(value / THOUSAND, 1))
    } else {
        to_fixed(value, 0)
    }
}
