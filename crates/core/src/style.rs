//! Styled view of a summarized frame and its HTML rendering.

use crate::config::FormatErrorPolicy;
use crate::css::{base_styles, declarations, TableStyle, SUMMARY_CLASS};
use crate::error::{Result, SummaryError};
use crate::summarizer::{Materialized, Summarizer};
use prettyframe_formatting::{format_fixed, Separators};
use prettyframe_frame::{CellValue, Label};
use serde::Serialize;

const DEFAULT_TABLE_ID: &str = "T_prettyframe";

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledCell {
    pub column: String,
    pub value: CellValue,
    pub display: String,
    pub is_summary: bool,
    /// Shown as empty: a summary intersection or a missing summary value.
    pub is_blank: bool,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledRow {
    pub label: Label,
    pub is_summary: bool,
    pub cells: Vec<StyledCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub name: String,
    pub is_summary: bool,
}

/// A summarized frame with every cell's display string and CSS hooks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledFrame {
    pub index_names: Vec<Option<String>>,
    pub header: Vec<HeaderCell>,
    pub rows: Vec<StyledRow>,
    pub table_styles: Vec<TableStyle>,
    pub summary_properties: Vec<(String, String)>,
    pub caption: Option<String>,
    pub table_id: Option<String>,
}

impl Summarizer {
    /// Materialize, then format every cell and mark the summary cells.
    pub fn style(&self) -> Result<StyledFrame> {
        let materialized = self.materialize()?;
        build(&materialized, self)
    }

    /// HTML table for the styled view.
    pub fn render(&self) -> Result<String> {
        Ok(self.style()?.to_html())
    }
}

fn build(materialized: &Materialized, summarizer: &Summarizer) -> Result<StyledFrame> {
    let config = summarizer.config();
    let frame = &materialized.frame;
    let is_summary = |r: usize, c: usize| r >= materialized.base_rows || c >= materialized.base_cols;

    let blank: Vec<Vec<bool>> = frame
        .rows()
        .enumerate()
        .map(|(r, (_, values))| {
            values
                .iter()
                .enumerate()
                .map(|(c, value)| is_summary(r, c) && (value.is_missing() || value.is_blank()))
                .collect()
        })
        .collect();

    let mut display: Vec<Vec<Option<String>>> = vec![vec![None; frame.col_count()]; frame.row_count()];
    for binding in summarizer.formatters() {
        for (r, c) in binding.subset().resolve(frame)? {
            if blank[r][c] {
                continue;
            }
            let value = frame.get(r, c)?;
            let text = match binding.formatter().format(value) {
                Ok(text) => text,
                Err(source) => match config.on_format_error {
                    FormatErrorPolicy::Propagate => {
                        return Err(SummaryError::Format {
                            row: frame.index()[r].to_string(),
                            column: frame.columns()[c].clone(),
                            source,
                        });
                    }
                    FormatErrorPolicy::Stringify => {
                        tracing::warn!(
                            row = %frame.index()[r],
                            column = %frame.columns()[c],
                            error = %source,
                            "formatter failed, showing plain value"
                        );
                        value.to_string()
                    }
                },
            };
            display[r][c] = Some(text);
        }
    }

    let header = frame
        .columns()
        .iter()
        .enumerate()
        .map(|(c, name)| HeaderCell {
            name: name.clone(),
            is_summary: c >= materialized.base_cols,
        })
        .collect();

    let rows = frame
        .rows()
        .zip(display)
        .enumerate()
        .map(|(r, ((label, values), texts))| {
            let cells = values
                .iter()
                .zip(texts)
                .enumerate()
                .map(|(c, (value, text))| {
                    let summary = is_summary(r, c);
                    let mut classes = vec!["data".to_string(), format!("row{r}"), format!("col{c}")];
                    if summary {
                        classes.push(SUMMARY_CLASS.to_string());
                    }
                    let display = if blank[r][c] {
                        String::new()
                    } else {
                        text.unwrap_or_else(|| default_display(value, config.precision))
                    };
                    StyledCell {
                        column: frame.columns()[c].clone(),
                        value: value.clone(),
                        display,
                        is_summary: summary,
                        is_blank: blank[r][c],
                        classes,
                    }
                })
                .collect();
            StyledRow {
                label: label.clone(),
                is_summary: r >= materialized.base_rows,
                cells,
            }
        })
        .collect();

    let mut table_styles = base_styles();
    table_styles.extend(config.table_styles.iter().cloned());

    Ok(StyledFrame {
        index_names: frame.index_names().to_vec(),
        header,
        rows,
        table_styles,
        summary_properties: config.summary_properties.clone(),
        caption: config.caption.clone(),
        table_id: config.table_id.clone(),
    })
}

fn default_display(value: &CellValue, precision: Option<usize>) -> String {
    match (value, precision) {
        (CellValue::Float(f), Some(precision)) if f.is_finite() => {
            format_fixed(*f, precision, Separators::PLAIN)
        }
        _ => value.to_string(),
    }
}

impl StyledFrame {
    /// Display strings, row by row.
    #[must_use]
    pub fn displays(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(|cell| cell.display.as_str()).collect())
            .collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&StyledCell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render as an HTML `<style>` block followed by a `<table>`.
    #[must_use]
    pub fn to_html(&self) -> String {
        let id = html_escape(self.table_id.as_deref().unwrap_or(DEFAULT_TABLE_ID));
        let scope = format!("#{id}");
        let levels = self.index_names.len().max(1);
        let mut html = String::new();

        html.push_str("<style type=\"text/css\">\n");
        for style in &self.table_styles {
            html.push_str(&format!("  {}\n", style.to_css(&scope)));
        }
        html.push_str(&format!(
            "  {scope} td.{SUMMARY_CLASS}, {scope} th.{SUMMARY_CLASS} {{ {} }}\n",
            declarations(&self.summary_properties)
        ));
        html.push_str("</style>\n");

        html.push_str(&format!("<table id=\"{id}\">\n"));
        if let Some(caption) = &self.caption {
            html.push_str(&format!("  <caption>{}</caption>\n", html_escape(caption)));
        }

        html.push_str("  <thead>\n    <tr>\n");
        for level in 0..levels {
            let name = self
                .index_names
                .get(level)
                .and_then(Option::as_deref)
                .unwrap_or("");
            html.push_str(&format!(
                "      <th class=\"index_name level{level}\">{}</th>\n",
                html_escape(name)
            ));
        }
        for (c, head) in self.header.iter().enumerate() {
            let summary = if head.is_summary {
                format!(" {SUMMARY_CLASS}")
            } else {
                String::new()
            };
            html.push_str(&format!(
                "      <th class=\"col_heading level0 col{c}{summary}\">{}</th>\n",
                html_escape(&head.name)
            ));
        }
        html.push_str("    </tr>\n  </thead>\n  <tbody>\n");

        for (r, row) in self.rows.iter().enumerate() {
            if row.is_summary {
                html.push_str(&format!("    <tr class=\"{SUMMARY_CLASS}\">\n"));
            } else {
                html.push_str("    <tr>\n");
            }
            for (level, part) in row.label.parts().iter().enumerate() {
                let summary = if row.is_summary {
                    format!(" {SUMMARY_CLASS}")
                } else {
                    String::new()
                };
                html.push_str(&format!(
                    "      <th class=\"row_heading level{level} row{r}{summary}\">{}</th>\n",
                    html_escape(&part.to_string())
                ));
            }
            for (c, cell) in row.cells.iter().enumerate() {
                html.push_str(&format!(
                    "      <td id=\"{id}_row{r}_col{c}\" class=\"{}\">{}</td>\n",
                    cell.classes.join(" "),
                    html_escape(&cell.display)
                ));
            }
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n</table>\n");
        html
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href='x'>&</a>"), "&lt;a href=&#39;x&#39;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn test_default_display_precision() {
        assert_eq!(default_display(&CellValue::Float(1.23456), Some(2)), "1.23");
        assert_eq!(default_display(&CellValue::Float(1.5), None), "1.5");
        assert_eq!(default_display(&CellValue::Int(7), Some(2)), "7");
        assert_eq!(default_display(&CellValue::Float(f64::NAN), Some(2)), "NaN");
    }
}
