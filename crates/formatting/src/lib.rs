//! Display formatters for frame cells.
//!
//! ```
//! use prettyframe_formatting::{CellFormatter, Location, PercentFormat, UnitFormat};
//! use prettyframe_frame::CellValue;
//!
//! let pct = PercentFormat::new(1).unwrap();
//! assert_eq!(pct.format(&CellValue::Float(0.125)).unwrap(), "12.5%");
//!
//! let kg = UnitFormat::new(" kg", 2, Location::Suffix).unwrap();
//! assert_eq!(kg.format(&CellValue::Int(3)).unwrap(), "3.00 kg");
//! ```

mod error;
mod formatter;
mod locale;
mod number;

pub use error::{FormatError, Result};
#[allow(deprecated)]
pub use formatter::as_money;
pub use formatter::{
    format_currency, format_percent, format_unit, CellFormatter, CurrencyFormat, FnFormatter,
    Location, PercentFormat, PercentScale, UnitFormat,
};
pub use locale::{default_locale, reset_default_locale, set_default_locale, Locale};
pub use number::{check_precision, format_fixed, format_number, precision_from_f64, Separators, MAX_PRECISION};
