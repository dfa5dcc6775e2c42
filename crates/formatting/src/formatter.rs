//! Cell formatters.
//!
//! Each formatter is a plain options struct implementing [`CellFormatter`].
//! Formatters are cheap to clone and are shared across threads behind an
//! `Arc<dyn CellFormatter>`.

use crate::error::{FormatError, Result};
use crate::locale::{default_locale, Locale};
use crate::number::{check_precision, format_fixed, render_unsigned, Separators};
use prettyframe_frame::CellValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Turns one cell value into its display string.
pub trait CellFormatter: Send + Sync + fmt::Debug {
    fn format(&self, value: &CellValue) -> Result<String>;
}

/// Shared missing-value and type handling for numeric formatters.
///
/// Returns `Ok(Err(text))` when the cell is missing and `text` should be
/// shown without further work.
fn numeric_input(value: &CellValue, na_rep: Option<&str>) -> Result<std::result::Result<f64, String>> {
    if value.is_missing() {
        return Ok(Err(na_rep.unwrap_or_default().to_string()));
    }
    match value.as_number() {
        Some(n) => Ok(Ok(n)),
        None => Err(FormatError::NonNumeric {
            type_name: value.type_name().to_string(),
            value: value.to_string(),
        }),
    }
}

// ============================================================================
// Percent
// ============================================================================

/// How a percent formatter reads its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentScale {
    /// `1.0` is shown as `100%`.
    #[default]
    Fraction,
    /// `1.0` is shown as `1%`.
    Whole,
}

/// Formats numbers as percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentFormat {
    precision: usize,
    scale: PercentScale,
    na_rep: Option<String>,
}

impl PercentFormat {
    pub fn new(precision: usize) -> Result<Self> {
        Ok(Self {
            precision: check_precision(precision)?,
            scale: PercentScale::default(),
            na_rep: None,
        })
    }

    #[must_use]
    pub fn scale(mut self, scale: PercentScale) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn na_rep(mut self, na_rep: impl Into<String>) -> Self {
        self.na_rep = Some(na_rep.into());
        self
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }
}

impl Default for PercentFormat {
    fn default() -> Self {
        Self {
            precision: 0,
            scale: PercentScale::default(),
            na_rep: None,
        }
    }
}

impl CellFormatter for PercentFormat {
    fn format(&self, value: &CellValue) -> Result<String> {
        match numeric_input(value, self.na_rep.as_deref())? {
            Ok(n) => Ok(format_percent(n, self.precision, self.scale)),
            Err(text) => Ok(text),
        }
    }
}

/// Format a number as a percentage.
#[must_use]
pub fn format_percent(value: f64, precision: usize, scale: PercentScale) -> String {
    let scaled = match scale {
        PercentScale::Fraction => value * 100.0,
        PercentScale::Whole => value,
    };
    format!("{}%", format_fixed(scaled, precision, Separators::PLAIN))
}

// ============================================================================
// Currency
// ============================================================================

/// Formats numbers as an amount of money in a given currency.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    currency: String,
    locale: Option<Locale>,
    na_rep: Option<String>,
}

impl CurrencyFormat {
    /// Currency formatter that follows the process-wide default locale.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into().to_ascii_uppercase(),
            locale: None,
            na_rep: None,
        }
    }

    /// Pin the formatter to `locale` instead of the process-wide default.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    #[must_use]
    pub fn na_rep(mut self, na_rep: impl Into<String>) -> Self {
        self.na_rep = Some(na_rep.into());
        self
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("USD")
    }
}

impl CellFormatter for CurrencyFormat {
    fn format(&self, value: &CellValue) -> Result<String> {
        match numeric_input(value, self.na_rep.as_deref())? {
            Ok(n) => {
                let locale = self.locale.unwrap_or_else(default_locale);
                Ok(locale.format_currency(n, &self.currency))
            }
            Err(text) => Ok(text),
        }
    }
}

/// Format a number as currency. `None` uses the process-wide default locale.
#[must_use]
pub fn format_currency(value: f64, currency: &str, locale: Option<Locale>) -> String {
    locale
        .unwrap_or_else(default_locale)
        .format_currency(value, currency)
}

// ============================================================================
// Unit
// ============================================================================

/// Where a unit goes relative to the number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Prefix,
    #[default]
    Suffix,
}

impl FromStr for Location {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "prefix" => Ok(Location::Prefix),
            "suffix" => Ok(Location::Suffix),
            other => Err(FormatError::InvalidLocation(other.to_string())),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Prefix => write!(f, "prefix"),
            Location::Suffix => write!(f, "suffix"),
        }
    }
}

/// Formats numbers with a fixed precision and a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitFormat {
    unit: String,
    precision: usize,
    location: Location,
    thousands: bool,
    na_rep: Option<String>,
}

impl UnitFormat {
    pub fn new(unit: impl Into<String>, precision: usize, location: Location) -> Result<Self> {
        Ok(Self {
            unit: unit.into(),
            precision: check_precision(precision)?,
            location,
            thousands: false,
            na_rep: None,
        })
    }

    /// Group integer digits with `,`.
    #[must_use]
    pub fn thousands(mut self, thousands: bool) -> Self {
        self.thousands = thousands;
        self
    }

    #[must_use]
    pub fn na_rep(mut self, na_rep: impl Into<String>) -> Self {
        self.na_rep = Some(na_rep.into());
        self
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }
}

impl CellFormatter for UnitFormat {
    fn format(&self, value: &CellValue) -> Result<String> {
        match numeric_input(value, self.na_rep.as_deref())? {
            Ok(n) => {
                let seps = if self.thousands {
                    Separators::THOUSANDS
                } else {
                    Separators::PLAIN
                };
                Ok(place_unit(n, self.precision, seps, &self.unit, self.location))
            }
            Err(text) => Ok(text),
        }
    }
}

fn place_unit(value: f64, precision: usize, seps: Separators, unit: &str, location: Location) -> String {
    let (negative, digits) = render_unsigned(value, precision, seps);
    let sign = if negative { "-" } else { "" };
    match location {
        Location::Prefix => format!("{sign}{unit}{digits}"),
        Location::Suffix => format!("{sign}{digits}{unit}"),
    }
}

/// Format a number with a unit placed before or after it.
#[must_use]
pub fn format_unit(value: f64, unit: &str, precision: usize, location: Location) -> String {
    place_unit(value, precision, Separators::PLAIN, unit, location)
}

/// Money formatter with a literal symbol.
///
/// Kept for callers of the older API; new code should use [`CurrencyFormat`].
#[deprecated(note = "use CurrencyFormat, which follows locale conventions")]
pub fn as_money(precision: usize, symbol: &str, location: Location) -> Result<UnitFormat> {
    tracing::warn!("as_money is deprecated; use CurrencyFormat instead");
    UnitFormat::new(symbol, precision, location)
}

// ============================================================================
// Closures
// ============================================================================

type FormatFn = dyn Fn(&CellValue) -> Result<String> + Send + Sync;

/// Formatter backed by a closure.
#[derive(Clone)]
pub struct FnFormatter {
    name: String,
    func: Arc<FormatFn>,
}

impl FnFormatter {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&CellValue) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }
}

impl fmt::Debug for FnFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFormatter").field("name", &self.name).finish()
    }
}

impl CellFormatter for FnFormatter {
    fn format(&self, value: &CellValue) -> Result<String> {
        (self.func)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_fraction_and_whole() {
        let pct = PercentFormat::new(1).unwrap();
        assert_eq!(pct.format(&CellValue::Float(0.256)).unwrap(), "25.6%");
        let whole = PercentFormat::new(0).unwrap().scale(PercentScale::Whole);
        assert_eq!(whole.format(&CellValue::Int(42)).unwrap(), "42%");
    }

    #[test]
    fn test_missing_values() {
        let pct = PercentFormat::default();
        assert_eq!(pct.format(&CellValue::Null).unwrap(), "");
        let pct = pct.na_rep("-");
        assert_eq!(pct.format(&CellValue::Float(f64::NAN)).unwrap(), "-");
    }

    #[test]
    fn test_non_numeric_rejected() {
        let unit = UnitFormat::new("kg", 1, Location::Suffix).unwrap();
        let err = unit.format(&CellValue::from("heavy")).unwrap_err();
        assert!(matches!(err, FormatError::NonNumeric { .. }));
        assert!(unit.format(&CellValue::Bool(true)).is_err());
    }

    #[test]
    fn test_unit_placement() {
        assert_eq!(format_unit(2.5, " kg", 2, Location::Suffix), "2.50 kg");
        assert_eq!(format_unit(-2.5, "$", 1, Location::Prefix), "-$2.5");
        let grouped = UnitFormat::new("m", 0, Location::Suffix)
            .unwrap()
            .thousands(true);
        assert_eq!(grouped.format(&CellValue::Int(1_500_000)).unwrap(), "1,500,000m");
    }

    #[test]
    fn test_location_parse() {
        assert_eq!("prefix".parse::<Location>().unwrap(), Location::Prefix);
        assert!(matches!(
            "middle".parse::<Location>(),
            Err(FormatError::InvalidLocation(_))
        ));
    }

    #[test]
    fn test_precision_rejected() {
        assert!(PercentFormat::new(99).is_err());
        assert!(UnitFormat::new("x", 21, Location::Suffix).is_err());
    }

    #[test]
    fn test_currency_pinned_locale() {
        let fmt = CurrencyFormat::new("eur").locale(Locale::parse("de_DE").unwrap());
        assert_eq!(fmt.format(&CellValue::Float(-1234.5)).unwrap(), "-1.234,50\u{a0}€");
    }

    #[test]
    fn test_fn_formatter() {
        let upper = FnFormatter::new("upper", |v| Ok(v.to_string().to_uppercase()));
        assert_eq!(upper.format(&CellValue::from("abc")).unwrap(), "ABC");
        assert!(format!("{upper:?}").contains("upper"));
    }

    #[test]
    #[allow(deprecated)]
    fn test_as_money() {
        let money = as_money(2, "$", Location::Prefix).unwrap();
        assert_eq!(money.format(&CellValue::Int(5)).unwrap(), "$5.00");
    }
}
