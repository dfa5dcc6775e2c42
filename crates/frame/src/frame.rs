use crate::cell::CellValue;
use crate::error::{FrameError, Result};
use crate::label::{Label, LabelPart};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A labeled table: ordered rows (each with a [`Label`]) by named columns.
///
/// Storage is row-major. Column names need not be unique; lookups by name
/// resolve to the first matching column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    index: Vec<Label>,
    index_names: Vec<Option<String>>,
    columns: Vec<String>,
    data: Vec<Vec<CellValue>>,
    #[serde(skip)]
    column_index: HashMap<String, usize>,
}

impl Frame {
    /// Create a frame from column names, row labels and row-major data.
    pub fn new(columns: Vec<String>, index: Vec<Label>, data: Vec<Vec<CellValue>>) -> Result<Self> {
        if index.len() != data.len() {
            return Err(FrameError::LengthMismatch {
                expected: data.len(),
                actual: index.len(),
            });
        }
        for row in &data {
            if row.len() != columns.len() {
                return Err(FrameError::LengthMismatch {
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
        }
        let levels = index.first().map_or(1, Label::levels);
        if let Some(bad) = index.iter().find(|label| label.levels() != levels) {
            return Err(FrameError::LevelMismatch {
                expected: levels,
                actual: bad.levels(),
            });
        }

        let mut frame = Frame {
            index,
            index_names: vec![None; levels],
            columns,
            data,
            column_index: HashMap::new(),
        };
        frame.rebuild_column_index();
        Ok(frame)
    }

    /// Create an empty frame with no rows and no columns
    #[must_use]
    pub fn empty() -> Self {
        Frame {
            index: Vec::new(),
            index_names: vec![None],
            columns: Vec::new(),
            data: Vec::new(),
            column_index: HashMap::new(),
        }
    }

    /// Create a frame from rows, labeling them `0..n`.
    pub fn from_rows<T: Into<CellValue>>(columns: &[&str], rows: Vec<Vec<T>>) -> Result<Self> {
        let data: Vec<Vec<CellValue>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        let index = range_index(data.len());
        Self::new(
            columns.iter().map(|c| (*c).to_string()).collect(),
            index,
            data,
        )
    }

    /// Create a frame from ordered named columns, labeling rows `0..n`.
    pub fn from_columns(columns: IndexMap<String, Vec<CellValue>>) -> Result<Self> {
        let row_count = columns.values().next().map_or(0, Vec::len);
        let mut names = Vec::with_capacity(columns.len());
        let mut data = vec![Vec::with_capacity(columns.len()); row_count];

        for (name, values) in columns {
            if values.len() != row_count {
                return Err(FrameError::LengthMismatch {
                    expected: row_count,
                    actual: values.len(),
                });
            }
            for (row, value) in data.iter_mut().zip(values) {
                row.push(value);
            }
            names.push(name);
        }

        Self::new(names, range_index(row_count), data)
    }

    /// Create a frame from `(name, values)` pairs of a single value type.
    pub fn from_pairs<S, T>(pairs: Vec<(S, Vec<T>)>) -> Result<Self>
    where
        S: Into<String>,
        T: Into<CellValue>,
    {
        let columns: IndexMap<String, Vec<CellValue>> = pairs
            .into_iter()
            .map(|(name, values)| (name.into(), values.into_iter().map(Into::into).collect()))
            .collect();
        Self::from_columns(columns)
    }

    /// A single-column frame.
    pub fn from_series<T: Into<CellValue>>(name: &str, values: Vec<T>) -> Result<Self> {
        Self::from_pairs(vec![(name, values)])
    }

    /// Replace the row labels.
    pub fn with_index(mut self, index: Vec<Label>) -> Result<Self> {
        if index.len() != self.data.len() {
            return Err(FrameError::LengthMismatch {
                expected: self.data.len(),
                actual: index.len(),
            });
        }
        let levels = index.first().map_or(1, Label::levels);
        if let Some(bad) = index.iter().find(|label| label.levels() != levels) {
            return Err(FrameError::LevelMismatch {
                expected: levels,
                actual: bad.levels(),
            });
        }
        self.index = index;
        self.index_names = vec![None; levels];
        Ok(self)
    }

    /// Move the given columns into the row labels, one level per column.
    pub fn set_index(&self, columns: &[&str]) -> Result<Frame> {
        if columns.is_empty() {
            return Err(FrameError::EmptyIndex);
        }
        let positions = columns
            .iter()
            .map(|name| self.require_column(name))
            .collect::<Result<Vec<_>>>()?;

        let index = self
            .data
            .iter()
            .map(|row| Label::new(positions.iter().map(|&p| cell_to_part(&row[p])).collect()))
            .collect();
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|c| !positions.contains(c))
            .collect();
        let data = self
            .data
            .iter()
            .map(|row| keep.iter().map(|&c| row[c].clone()).collect())
            .collect();
        let names = keep.iter().map(|&c| self.columns[c].clone()).collect();

        let mut frame = Frame::new(names, index, data)?;
        frame.index_names = columns.iter().map(|c| Some((*c).to_string())).collect();
        Ok(frame)
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.col_count())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() || self.columns.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> &[Label] {
        &self.index
    }

    #[must_use]
    pub fn index_names(&self) -> &[Option<String>] {
        &self.index_names
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of levels in the row labels
    #[must_use]
    pub fn index_levels(&self) -> usize {
        self.index_names.len()
    }

    #[must_use]
    pub fn is_multi_level(&self) -> bool {
        self.index_levels() > 1
    }

    /// Get a cell by position
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(FrameError::IndexOutOfBounds {
                row,
                col,
                rows: self.row_count(),
                cols: self.col_count(),
            })
    }

    /// Get a cell by row label and column name
    pub fn get_by_label(&self, label: &Label, column: &str) -> Result<&CellValue> {
        let row = self.require_row(label)?;
        let col = self.require_column(column)?;
        self.get(row, col)
    }

    /// Position of the first column with this name
    #[must_use]
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.column_index.get(name).copied()
    }

    /// Position of the first row selected by this label (see [`Label::matches`])
    #[must_use]
    pub fn row_position(&self, label: &Label) -> Option<usize> {
        self.index.iter().position(|l| l.matches(label))
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_position(name)
            .ok_or_else(|| FrameError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    pub fn require_row(&self, label: &Label) -> Result<usize> {
        self.row_position(label).ok_or_else(|| FrameError::RowNotFound {
            label: label.to_string(),
        })
    }

    /// Values of a column, top to bottom
    pub fn column_values(&self, name: &str) -> Result<Vec<&CellValue>> {
        let col = self.require_column(name)?;
        Ok(self.column_at(col).collect())
    }

    /// Iterate the values of the column at `col`
    pub fn column_at(&self, col: usize) -> impl Iterator<Item = &CellValue> {
        self.data.iter().filter_map(move |row| row.get(col))
    }

    /// Values of the row at `row`
    pub fn row_values(&self, row: usize) -> Result<&[CellValue]> {
        self.data
            .get(row)
            .map(Vec::as_slice)
            .ok_or(FrameError::IndexOutOfBounds {
                row,
                col: 0,
                rows: self.row_count(),
                cols: self.col_count(),
            })
    }

    /// Iterate `(label, values)` pairs
    pub fn rows(&self) -> impl Iterator<Item = (&Label, &[CellValue])> {
        self.index.iter().zip(self.data.iter().map(Vec::as_slice))
    }

    /// A new frame holding only the named columns, in the given order.
    pub fn select_columns(&self, names: &[String]) -> Result<Frame> {
        let positions = names
            .iter()
            .map(|name| self.require_column(name))
            .collect::<Result<Vec<_>>>()?;
        let data = self
            .data
            .iter()
            .map(|row| positions.iter().map(|&c| row[c].clone()).collect())
            .collect();
        let mut frame = Frame::new(names.to_vec(), self.index.clone(), data)?;
        frame.index_names.clone_from(&self.index_names);
        Ok(frame)
    }

    /// A new frame holding only the labeled rows, in the given order.
    pub fn select_rows(&self, labels: &[Label]) -> Result<Frame> {
        let positions = labels
            .iter()
            .map(|label| self.require_row(label))
            .collect::<Result<Vec<_>>>()?;
        let data = positions.iter().map(|&r| self.data[r].clone()).collect();
        let index = positions.iter().map(|&r| self.index[r].clone()).collect();
        let mut frame = Frame::new(self.columns.clone(), index, data)?;
        frame.index_names.clone_from(&self.index_names);
        Ok(frame)
    }

    /// Stack the rows of `other` below this frame.
    ///
    /// Columns are matched by position; both frames must have the same
    /// column count and label depth.
    pub fn concat_rows(&self, other: &Frame) -> Result<Frame> {
        if self.col_count() != other.col_count() {
            return Err(FrameError::LengthMismatch {
                expected: self.col_count(),
                actual: other.col_count(),
            });
        }
        if !other.index.is_empty() && other.index_levels() != self.index_levels() {
            return Err(FrameError::LevelMismatch {
                expected: self.index_levels(),
                actual: other.index_levels(),
            });
        }

        let mut frame = self.clone();
        frame.index.extend(other.index.iter().cloned());
        frame.data.extend(other.data.iter().cloned());
        Ok(frame)
    }

    /// Place the columns of `other` to the right of this frame.
    ///
    /// Rows are matched by position. Duplicate column names are kept.
    pub fn concat_columns(&self, other: &Frame) -> Result<Frame> {
        if self.row_count() != other.row_count() {
            return Err(FrameError::LengthMismatch {
                expected: self.row_count(),
                actual: other.row_count(),
            });
        }

        let mut frame = self.clone();
        for (row, extra) in frame.data.iter_mut().zip(other.data.iter()) {
            row.extend(extra.iter().cloned());
        }
        frame.columns.extend(other.columns.iter().cloned());
        frame.rebuild_column_index();
        Ok(frame)
    }

    /// A new frame with every cell replaced by `f(row, col, value)`.
    #[must_use]
    pub fn map_cells<F>(&self, f: F) -> Frame
    where
        F: Fn(usize, usize, &CellValue) -> CellValue,
    {
        let mut frame = self.clone();
        for (r, row) in frame.data.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = f(r, c, cell);
            }
        }
        frame
    }

    pub(crate) fn set_index_names(&mut self, names: Vec<Option<String>>) {
        self.index_names = names;
    }

    fn rebuild_column_index(&mut self) {
        self.column_index.clear();
        for (i, name) in self.columns.iter().enumerate() {
            self.column_index.entry(name.clone()).or_insert(i);
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::empty()
    }
}

fn range_index(n: usize) -> Vec<Label> {
    (0..n).map(Label::from).collect()
}

fn cell_to_part(value: &CellValue) -> LabelPart {
    match value {
        CellValue::Int(i) => LabelPart::Int(*i),
        other => LabelPart::Str(other.to_string()),
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.index.iter().map(ToString::to_string).collect();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let cells: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(c, name)| {
                cells
                    .iter()
                    .map(|row| row[c].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (name, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {name:>width$}")?;
        }
        for (label, row) in labels.iter().zip(&cells) {
            writeln!(f)?;
            write!(f, "{label:<label_width$}")?;
            for (cell, width) in row.iter().zip(&widths) {
                write!(f, "  {cell:>width$}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::from_rows(&["A", "B"], vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap()
    }

    #[test]
    fn test_from_rows_range_index() {
        let frame = sample();
        assert_eq!(frame.shape(), (3, 2));
        assert_eq!(frame.index()[2], Label::from(2));
        assert_eq!(frame.get(1, 1).unwrap(), &CellValue::Int(4));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Frame::from_rows(&["A", "B"], vec![vec![1, 2], vec![3]]);
        assert!(matches!(result, Err(FrameError::LengthMismatch { .. })));
    }

    #[test]
    fn test_mixed_levels_rejected() {
        let result = Frame::new(
            vec!["A".to_string()],
            vec![Label::from(1), Label::from(("a", 2))],
            vec![vec![CellValue::Int(1)], vec![CellValue::Int(2)]],
        );
        assert!(matches!(result, Err(FrameError::LevelMismatch { .. })));
    }

    #[test]
    fn test_set_index_builds_levels() {
        let frame = Frame::from_rows(&["A", "B", "C"], vec![vec![1, 3, 6], vec![2, 4, 7]])
            .unwrap()
            .set_index(&["A", "B"])
            .unwrap();
        assert!(frame.is_multi_level());
        assert_eq!(frame.columns(), &["C".to_string()]);
        assert_eq!(frame.index()[1], Label::from((2, 4)));
        assert_eq!(frame.index_names()[0].as_deref(), Some("A"));
    }

    #[test]
    fn test_concat_rows_and_columns() {
        let frame = sample();
        let extra_row = Frame::new(
            frame.columns().to_vec(),
            vec![Label::from("Total")],
            vec![vec![CellValue::Int(9), CellValue::Int(12)]],
        )
        .unwrap();
        let stacked = frame.concat_rows(&extra_row).unwrap();
        assert_eq!(stacked.row_count(), 4);
        assert_eq!(
            stacked.get_by_label(&Label::from("Total"), "B").unwrap(),
            &CellValue::Int(12)
        );

        let extra_col = Frame::new(
            vec!["A".to_string()],
            stacked.index().to_vec(),
            vec![vec![CellValue::Null]; 4],
        )
        .unwrap();
        let wide = stacked.concat_columns(&extra_col).unwrap();
        assert_eq!(wide.col_count(), 3);
        // First occurrence wins on duplicate names.
        assert_eq!(wide.column_position("A"), Some(0));
    }

    #[test]
    fn test_select() {
        let frame = sample();
        let cols = frame.select_columns(&["B".to_string()]).unwrap();
        assert_eq!(cols.shape(), (3, 1));
        let rows = frame.select_rows(&[Label::from(2)]).unwrap();
        assert_eq!(rows.get(0, 0).unwrap(), &CellValue::Int(5));
        assert!(frame.select_columns(&["Z".to_string()]).is_err());
    }

    #[test]
    fn test_display_aligns_columns() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "   A  B");
        assert_eq!(lines[1], "0  1  2");
    }
}
