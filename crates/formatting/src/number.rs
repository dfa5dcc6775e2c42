//! Fixed-precision number rendering shared by all formatters.

use crate::error::{FormatError, Result};

/// Largest number of decimal places a formatter accepts.
pub const MAX_PRECISION: usize = 20;

/// Separators used when rendering a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub decimal: char,
    /// `None` disables digit grouping.
    pub group: Option<&'static str>,
}

impl Separators {
    /// `.` decimal point, no grouping
    pub const PLAIN: Separators = Separators {
        decimal: '.',
        group: None,
    };

    /// `.` decimal point, `,` every three digits
    pub const THOUSANDS: Separators = Separators {
        decimal: '.',
        group: Some(","),
    };
}

impl Default for Separators {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// Check a precision against [`MAX_PRECISION`].
pub fn check_precision(precision: usize) -> Result<usize> {
    if precision > MAX_PRECISION {
        return Err(FormatError::InvalidPrecision(precision.to_string()));
    }
    Ok(precision)
}

/// Convert a loosely typed precision (e.g. from JSON) into a checked one.
///
/// Fractional, negative and non-finite values are rejected.
pub fn precision_from_f64(value: f64) -> Result<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(FormatError::InvalidPrecision(value.to_string()));
    }
    check_precision(value as usize)
}

/// Render `value` with exactly `precision` decimals.
///
/// The sign is returned separately so callers can place it ahead of a
/// prefix (`-$1.00` rather than `$-1.00`).
pub(crate) fn render_unsigned(value: f64, precision: usize, seps: Separators) -> (bool, String) {
    if value.is_nan() {
        return (false, "NaN".to_string());
    }
    let negative = value < 0.0;
    if value.is_infinite() {
        return (negative, "inf".to_string());
    }

    let formatted = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((left, right)) => (left, Some(right)),
        None => (formatted.as_str(), None),
    };

    let mut out = match seps.group {
        Some(sep) => group_digits(int_part, sep),
        None => int_part.to_string(),
    };
    if let Some(frac) = frac_part {
        out.push(seps.decimal);
        out.push_str(frac);
    }
    (negative, out)
}

/// Render `value` with exactly `precision` decimals, sign included.
#[must_use]
pub fn format_fixed(value: f64, precision: usize, seps: Separators) -> String {
    let (negative, digits) = render_unsigned(value, precision, seps);
    if negative {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Format a number with a prefix and suffix around it.
#[must_use]
pub fn format_number(value: f64, precision: usize, prefix: &str, suffix: &str) -> String {
    let (negative, digits) = render_unsigned(value, precision, Separators::PLAIN);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{prefix}{digits}{suffix}")
}

fn group_digits(digits: &str, sep: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len());
    for (idx, ch) in chars.iter().enumerate() {
        if idx > 0 && (chars.len() - idx) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(*ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed_plain() {
        assert_eq!(format_fixed(1234.5, 2, Separators::PLAIN), "1234.50");
        assert_eq!(format_fixed(-0.126, 1, Separators::PLAIN), "-0.1");
        assert_eq!(format_fixed(7.0, 0, Separators::PLAIN), "7");
    }

    #[test]
    fn test_format_fixed_grouped() {
        assert_eq!(format_fixed(1_234_567.891, 2, Separators::THOUSANDS), "1,234,567.89");
        assert_eq!(format_fixed(-999.0, 0, Separators::THOUSANDS), "-999");
        let german = Separators {
            decimal: ',',
            group: Some("."),
        };
        assert_eq!(format_fixed(1234.5, 2, german), "1.234,50");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_fixed(f64::NAN, 2, Separators::PLAIN), "NaN");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2, Separators::PLAIN), "-inf");
    }

    #[test]
    fn test_format_number_sign_before_prefix() {
        assert_eq!(format_number(-5.0, 2, "$", ""), "-$5.00");
        assert_eq!(format_number(1.23456, 3, "", " cm"), "1.235 cm");
    }

    #[test]
    fn test_precision_checks() {
        assert_eq!(precision_from_f64(3.0), Ok(3));
        assert!(matches!(
            precision_from_f64(2.5),
            Err(FormatError::InvalidPrecision(_))
        ));
        assert!(precision_from_f64(-1.0).is_err());
        assert!(check_precision(MAX_PRECISION + 1).is_err());
    }
}
