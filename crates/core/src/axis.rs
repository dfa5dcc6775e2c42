use crate::error::{Result, SummaryError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction a summary is laid out in.
///
/// `Rows` adds one summary row below the data, reducing each column.
/// `Columns` adds one summary column to the right, reducing each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Rows,
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "rows"),
            Axis::Columns => write!(f, "columns"),
        }
    }
}

/// Axis argument of the summary-adding calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AxisSpec {
    #[default]
    Rows,
    Columns,
    /// One summary row and one summary column.
    Both,
}

impl AxisSpec {
    /// Accepts `rows`, `index`, `0`, `columns`, `1`, `both` and `none`.
    ///
    /// `index` follows the pandas `axis="index"` convention: it reduces down
    /// each column and adds a summary row, never a summary column.
    pub fn parse(token: &str) -> Result<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "rows" | "index" | "0" => Ok(AxisSpec::Rows),
            "columns" | "1" => Ok(AxisSpec::Columns),
            "both" | "none" => Ok(AxisSpec::Both),
            _ => Err(SummaryError::InvalidAxis(token.to_string())),
        }
    }

    /// The concrete axes, rows first.
    #[must_use]
    pub fn axes(self) -> &'static [Axis] {
        match self {
            AxisSpec::Rows => &[Axis::Rows],
            AxisSpec::Columns => &[Axis::Columns],
            AxisSpec::Both => &[Axis::Rows, Axis::Columns],
        }
    }
}

impl From<Axis> for AxisSpec {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Rows => AxisSpec::Rows,
            Axis::Columns => AxisSpec::Columns,
        }
    }
}

impl FromStr for AxisSpec {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self> {
        AxisSpec::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(AxisSpec::parse("rows").unwrap(), AxisSpec::Rows);
        assert_eq!(AxisSpec::parse("index").unwrap(), AxisSpec::Rows);
        assert_eq!(AxisSpec::parse("0").unwrap(), AxisSpec::Rows);
        assert_eq!(AxisSpec::parse("Columns").unwrap(), AxisSpec::Columns);
        assert_eq!(AxisSpec::parse("1").unwrap(), AxisSpec::Columns);
        assert_eq!(AxisSpec::parse("none").unwrap(), AxisSpec::Both);
        assert_eq!(AxisSpec::parse("both").unwrap(), AxisSpec::Both);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "2".parse::<AxisSpec>().unwrap_err();
        assert!(matches!(err, SummaryError::InvalidAxis(ref t) if t == "2"));
    }

    #[test]
    fn test_both_expands_rows_first() {
        assert_eq!(AxisSpec::Both.axes(), &[Axis::Rows, Axis::Columns]);
    }
}
