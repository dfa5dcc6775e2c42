//! JSON support for Frame
//!
//! Two layouts are supported:
//! - split: `{"index": [...], "index_names": [...], "columns": [...], "data": [[...]]}`
//! - records: `[{"A": 1, "B": 2}, ...]` (row labels are dropped)

use crate::cell::CellValue;
use crate::error::{FrameError, Result};
use crate::frame::Frame;
use crate::label::Label;
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Deserialize)]
struct SplitFrame {
    index: Vec<Label>,
    #[serde(default)]
    index_names: Vec<Option<String>>,
    columns: Vec<String>,
    data: Vec<Vec<CellValue>>,
}

impl Frame {
    /// Serialize to the split layout
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to the split layout, indented
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a frame from the split layout
    pub fn from_json_str(content: &str) -> Result<Self> {
        let split: SplitFrame = serde_json::from_str(content)?;
        let mut frame = Frame::new(split.columns, split.index, split.data)?;
        if !split.index_names.is_empty() {
            if split.index_names.len() != frame.index_levels() {
                return Err(FrameError::LevelMismatch {
                    expected: frame.index_levels(),
                    actual: split.index_names.len(),
                });
            }
            frame.set_index_names(split.index_names);
        }
        Ok(frame)
    }

    /// Rows as ordered `column -> value` maps.
    ///
    /// Later duplicate column names overwrite earlier ones.
    #[must_use]
    pub fn to_records(&self) -> Vec<IndexMap<String, CellValue>> {
        self.rows()
            .map(|(_, values)| {
                self.columns()
                    .iter()
                    .cloned()
                    .zip(values.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Serialize to the records layout
    pub fn to_records_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_records())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_layout() {
        let frame = Frame::from_rows(&["A", "B"], vec![vec![1.5, 2.0]])
            .unwrap()
            .with_index(vec![Label::from("x")])
            .unwrap();
        let json = frame.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"index":["x"],"index_names":[null],"columns":["A","B"],"data":[[1.5,2.0]]}"#
        );
        assert_eq!(Frame::from_json_str(&json).unwrap(), frame);
    }

    #[test]
    fn test_multi_level_labels_load() {
        let json = r#"{"index":[["a",1],["b",2]],"index_names":["k","n"],"columns":["v"],"data":[[1],[2]]}"#;
        let frame = Frame::from_json_str(json).unwrap();
        assert!(frame.is_multi_level());
        assert_eq!(frame.index()[1], Label::from(("b", 2)));
    }

    #[test]
    fn test_records() {
        let frame = Frame::from_rows(&["A", "B"], vec![vec![1, 2]]).unwrap();
        assert_eq!(frame.to_records_json().unwrap(), r#"[{"A":1,"B":2}]"#);
    }
}
