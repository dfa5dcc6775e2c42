//! Render configuration.

use crate::css::{summary_properties, TableStyle};
use crate::error::Result;
use prettyframe_formatting::precision_from_f64;
use serde::{Deserialize, Deserializer, Serialize};

/// What to do when a formatter fails on a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatErrorPolicy {
    /// Fail the render with [`crate::SummaryError::Format`].
    #[default]
    Propagate,
    /// Show the cell's plain string form and log a warning.
    Stringify,
}

/// Options for styling and rendering a summarized frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Decimals for float cells no formatter covers. `None` keeps the
    /// value's own string form.
    #[serde(deserialize_with = "deserialize_precision")]
    pub precision: Option<usize>,
    pub on_format_error: FormatErrorPolicy,
    /// CSS declarations for summary cells.
    pub summary_properties: Vec<(String, String)>,
    /// Extra rules appended after the base rules.
    pub table_styles: Vec<TableStyle>,
    pub caption: Option<String>,
    pub table_id: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            precision: None,
            on_format_error: FormatErrorPolicy::default(),
            summary_properties: summary_properties(),
            table_styles: Vec::new(),
            caption: None,
            table_id: None,
        }
    }
}

impl StyleConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FormatErrorPolicy) -> Self {
        self.on_format_error = policy;
        self
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_table_id(mut self, id: impl Into<String>) -> Self {
        self.table_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_table_style(mut self, style: TableStyle) -> Self {
        self.table_styles.push(style);
        self
    }
}

fn deserialize_precision<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(deserializer)?;
    raw.map(precision_from_f64)
        .transpose()
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SummaryError;

    #[test]
    fn test_defaults() {
        let config = StyleConfig::default();
        assert_eq!(config.precision, None);
        assert_eq!(config.on_format_error, FormatErrorPolicy::Propagate);
        assert_eq!(
            config.summary_properties,
            vec![("font-weight".to_string(), "900".to_string())]
        );
    }

    #[test]
    fn test_from_json() {
        let config =
            StyleConfig::from_json(r#"{"precision": 2, "on_format_error": "stringify", "caption": "Sales"}"#)
                .unwrap();
        assert_eq!(config.precision, Some(2));
        assert_eq!(config.on_format_error, FormatErrorPolicy::Stringify);
        assert_eq!(config.caption.as_deref(), Some("Sales"));
        assert!(config.table_styles.is_empty());
    }

    #[test]
    fn test_from_json_rejects_fractional_precision() {
        let err = StyleConfig::from_json(r#"{"precision": 1.5}"#).unwrap_err();
        assert!(matches!(err, SummaryError::Config(msg) if msg.contains("1.5")));
    }

    #[test]
    fn test_table_styles_from_json() {
        let config = StyleConfig::from_json(
            r#"{"table_styles": [{"selector": "td", "props": [["color", "red"]]}]}"#,
        )
        .unwrap();
        assert_eq!(config.table_styles[0], TableStyle::new("td", [("color", "red")]));
    }
}
