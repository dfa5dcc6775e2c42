//! Locale data for currency formatting and the process-wide default locale.
//!
//! The table covers the separators, symbol placement and home currency of a
//! handful of common locales. It is not a full CLDR database.

use crate::error::{FormatError, Result};
use crate::number::Separators;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

/// No-break space, placed between a number and a spaced currency symbol.
const NBSP: &str = "\u{a0}";

/// Number and currency conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    tag: &'static str,
    decimal: char,
    group: &'static str,
    symbol_first: bool,
    symbol_spaced: bool,
    home_currency: &'static str,
    home_symbol: &'static str,
}

const fn locale(
    tag: &'static str,
    decimal: char,
    group: &'static str,
    symbol_first: bool,
    symbol_spaced: bool,
    home_currency: &'static str,
    home_symbol: &'static str,
) -> Locale {
    Locale {
        tag,
        decimal,
        group,
        symbol_first,
        symbol_spaced,
        home_currency,
        home_symbol,
    }
}

static LOCALES: [Locale; 13] = [
    Locale::EN_US,
    locale("en_GB", '.', ",", true, false, "GBP", "£"),
    locale("en_CA", '.', ",", true, false, "CAD", "$"),
    locale("en_AU", '.', ",", true, false, "AUD", "$"),
    locale("de_DE", ',', ".", false, true, "EUR", "€"),
    locale("de_CH", '.', "’", true, true, "CHF", "CHF"),
    locale("fr_FR", ',', "\u{202f}", false, true, "EUR", "€"),
    locale("es_ES", ',', ".", false, true, "EUR", "€"),
    locale("it_IT", ',', ".", false, true, "EUR", "€"),
    locale("nl_NL", ',', ".", true, true, "EUR", "€"),
    locale("pt_BR", ',', ".", true, true, "BRL", "R$"),
    locale("ja_JP", '.', ",", true, false, "JPY", "￥"),
    locale("zh_CN", '.', ",", true, false, "CNY", "¥"),
];

/// Symbols used outside a currency's home locale.
const FOREIGN_SYMBOLS: [(&str, &str); 13] = [
    ("USD", "US$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "CN¥"),
    ("CAD", "CA$"),
    ("AUD", "A$"),
    ("CHF", "CHF"),
    ("BRL", "R$"),
    ("INR", "₹"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
];

/// Currencies without minor units.
const ZERO_DECIMAL_CURRENCIES: [&str; 3] = ["JPY", "KRW", "VND"];

impl Locale {
    pub const EN_US: Locale = locale("en_US", '.', ",", true, false, "USD", "$");

    /// Look up a locale by tag. Accepts `en_US`, `en-US` and any casing.
    pub fn parse(tag: &str) -> Result<Locale> {
        let normalized = tag.trim().replace('-', "_");
        LOCALES
            .iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&normalized))
            .copied()
            .ok_or_else(|| FormatError::UnknownLocale(tag.to_string()))
    }

    /// All supported locales
    #[must_use]
    pub fn available() -> &'static [Locale] {
        &LOCALES
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Grouped separators for this locale
    #[must_use]
    pub fn separators(&self) -> Separators {
        Separators {
            decimal: self.decimal,
            group: Some(self.group),
        }
    }

    /// Display symbol for a currency code in this locale.
    #[must_use]
    pub fn currency_symbol(&self, code: &str) -> String {
        let code = code.to_ascii_uppercase();
        if code == self.home_currency {
            return self.home_symbol.to_string();
        }
        FOREIGN_SYMBOLS
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(code, |(_, symbol)| (*symbol).to_string())
    }

    /// Format an amount in `currency` following this locale's conventions.
    #[must_use]
    pub fn format_currency(&self, amount: f64, currency: &str) -> String {
        let code = currency.to_ascii_uppercase();
        let decimals = if ZERO_DECIMAL_CURRENCIES.contains(&code.as_str()) {
            0
        } else {
            2
        };
        let symbol = self.currency_symbol(&code);
        let (negative, digits) =
            crate::number::render_unsigned(amount, decimals, self.separators());
        let sign = if negative { "-" } else { "" };

        // Alphabetic symbols ("CHF", unknown codes) always need a gap.
        let spaced = self.symbol_spaced || symbol.chars().all(|c| c.is_ascii_alphabetic());
        let gap = if spaced { NBSP } else { "" };

        if self.symbol_first {
            format!("{sign}{symbol}{gap}{digits}")
        } else {
            format!("{sign}{digits}{gap}{symbol}")
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

static DEFAULT_LOCALE: Lazy<RwLock<Locale>> = Lazy::new(|| RwLock::new(Locale::EN_US));

/// Set the process-wide default locale used by formatters without an
/// explicit locale.
///
/// Meant to be called once at startup (or once per test).
pub fn set_default_locale(locale: Locale) {
    let mut guard = DEFAULT_LOCALE
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    tracing::debug!(locale = locale.tag(), "default locale set");
    *guard = locale;
}

/// The current process-wide default locale
#[must_use]
pub fn default_locale() -> Locale {
    *DEFAULT_LOCALE
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Restore the initial default locale (`en_US`).
pub fn reset_default_locale() {
    set_default_locale(Locale::EN_US);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_variants() {
        assert_eq!(Locale::parse("en_US").unwrap(), Locale::EN_US);
        assert_eq!(Locale::parse("de-de").unwrap().tag(), "de_DE");
        assert!(matches!(
            Locale::parse("xx_YY"),
            Err(FormatError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_symbol_placement() {
        let us = Locale::EN_US;
        assert_eq!(us.format_currency(1234.5, "USD"), "$1,234.50");
        assert_eq!(us.format_currency(-3.0, "usd"), "-$3.00");
        assert_eq!(us.format_currency(1234.5, "EUR"), "€1,234.50");

        let de = Locale::parse("de_DE").unwrap();
        assert_eq!(de.format_currency(1234.5, "EUR"), "1.234,50\u{a0}€");
    }

    #[test]
    fn test_zero_decimal_currency() {
        let jp = Locale::parse("ja_JP").unwrap();
        assert_eq!(jp.format_currency(1234.0, "JPY"), "￥1,234");
    }

    #[test]
    fn test_alphabetic_symbol_is_spaced() {
        assert_eq!(Locale::EN_US.format_currency(10.0, "CHF"), "CHF\u{a0}10.00");
        assert_eq!(Locale::EN_US.format_currency(10.0, "XYZ"), "XYZ\u{a0}10.00");
    }

    #[test]
    fn test_foreign_dollar() {
        let gb = Locale::parse("en_GB").unwrap();
        assert_eq!(gb.format_currency(1.0, "USD"), "US$1.00");
        let ca = Locale::parse("en_CA").unwrap();
        assert_eq!(ca.format_currency(1.0, "CAD"), "$1.00");
    }

    #[test]
    #[serial]
    fn test_default_locale_lifecycle() {
        reset_default_locale();
        assert_eq!(default_locale(), Locale::EN_US);
        set_default_locale(Locale::parse("fr_FR").unwrap());
        assert_eq!(default_locale().tag(), "fr_FR");
        reset_default_locale();
        assert_eq!(default_locale(), Locale::EN_US);
    }
}
