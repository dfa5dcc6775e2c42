//! CSS used by rendered tables.

use serde::{Deserialize, Serialize};

/// Background of header cells.
pub const DEFAULT_BACKGROUND: &str = "#eee";

/// Colour of table borders.
pub const DEFAULT_BORDER_COLOUR: &str = "#c0c0c0";

/// Class added to every cell of a summary row or summary column.
pub const SUMMARY_CLASS: &str = "summary";

/// A CSS rule scoped to one rendered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStyle {
    pub selector: String,
    pub props: Vec<(String, String)>,
}

impl TableStyle {
    pub fn new<S, K, V, I>(selector: S, props: I) -> Self
    where
        S: Into<String>,
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            selector: selector.into(),
            props: props
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// `selector { a: b; c: d; }` with `scope` prepended to the selector.
    #[must_use]
    pub fn to_css(&self, scope: &str) -> String {
        format!(
            "{scope} {} {{ {} }}",
            self.selector,
            declarations(&self.props)
        )
    }
}

/// Header cell properties
#[must_use]
pub fn header_properties() -> Vec<(String, String)> {
    vec![
        ("background".to_string(), DEFAULT_BACKGROUND.to_string()),
        ("font-weight".to_string(), "500".to_string()),
    ]
}

/// Properties applied to summary cells unless configured otherwise.
#[must_use]
pub fn summary_properties() -> Vec<(String, String)> {
    vec![("font-weight".to_string(), "900".to_string())]
}

/// Base rules every rendered table starts with.
#[must_use]
pub fn base_styles() -> Vec<TableStyle> {
    vec![
        TableStyle::new("th", header_properties()),
        TableStyle::new("td", [("text-align", "right"), ("min-width", "3em")]),
        TableStyle::new("*", [("border-color", DEFAULT_BORDER_COLOUR)]),
    ]
}

/// `a: b; c: d;`
#[must_use]
pub fn declarations(props: &[(String, String)]) -> String {
    props
        .iter()
        .map(|(k, v)| format!("{k}: {v};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Page-wide stylesheet for `.dataframe` tables.
///
/// Injecting it styles every table on the page, not only ones rendered here.
#[must_use]
pub fn pretty_globals() -> String {
    format!(
        r"<style type='text/css'>
    /* Pretty frames */
    .dataframe * {{border-color: {DEFAULT_BORDER_COLOUR} !important;}}
    .dataframe th {{background: {DEFAULT_BACKGROUND};}}
    .dataframe td {{
        background: #fff;
        text-align: right;
        min-width: 5em;
    }}

    /* Summary rows and columns */
    .dataframe-summary-row tr:last-child,
    .dataframe-summary-col td:last-child,
    .dataframe td.{SUMMARY_CLASS} {{
        background: {DEFAULT_BACKGROUND};
        font-weight: 500;
    }}
</style>
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_style_css() {
        let style = TableStyle::new("td", [("color", "red"), ("padding", "0")]);
        assert_eq!(style.to_css("#t"), "#t td { color: red; padding: 0; }");
    }

    #[test]
    fn test_pretty_globals_selectors() {
        let css = pretty_globals();
        assert!(css.starts_with("<style"));
        assert!(css.contains(".dataframe-summary-row tr:last-child"));
        assert!(css.contains(".dataframe-summary-col td:last-child"));
        assert!(css.contains("#c0c0c0"));
    }
}
