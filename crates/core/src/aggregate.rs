//! A single summary request and its evaluation.

use crate::axis::Axis;
use crate::error::{Result, SummaryError};
use crate::reducer::{Reduced, Reducer};
use prettyframe_frame::{CellValue, Frame, Label, Subset};
use std::borrow::Cow;
use std::collections::HashSet;

/// One summary row or column waiting to be computed.
#[derive(Debug, Clone)]
pub struct Aggregate {
    title: String,
    reducer: Reducer,
    subset: Subset,
    axis: Axis,
}

/// The computed values of an [`Aggregate`], one per lane of the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub title: String,
    pub axis: Axis,
    /// Lanes outside the subset, or without numeric data, are `Null`.
    pub values: Vec<CellValue>,
}

impl Aggregate {
    pub fn new(title: impl Into<String>, reducer: Reducer, axis: Axis) -> Self {
        Self {
            title: title.into(),
            reducer,
            subset: Subset::All,
            axis,
        }
    }

    /// Restrict the data the reducer sees.
    ///
    /// `Rows` limits which rows feed the reduction, `Columns` which columns,
    /// `Region` both. Cell masks and predicates are not accepted.
    pub fn with_subset(mut self, subset: Subset) -> Result<Self> {
        if !subset.is_rectangular() {
            return Err(SummaryError::InvalidSubset(format!(
                "summary '{}' needs a row, column or region subset, got {subset:?}",
                self.title
            )));
        }
        self.subset = subset;
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn subset(&self) -> &Subset {
        &self.subset
    }

    pub fn reducer(&self) -> &Reducer {
        &self.reducer
    }

    pub(crate) fn retitled(&self, title: String) -> Self {
        Self {
            title,
            ..self.clone()
        }
    }

    /// Evaluate against `frame`.
    pub fn apply(&self, frame: &Frame) -> Result<SummaryLine> {
        let (rows, cols) = self.subset.region(frame)?;
        let (lane_count, lanes, cross) = match self.axis {
            Axis::Rows => (frame.col_count(), &cols, &rows),
            Axis::Columns => (frame.row_count(), &rows, &cols),
        };
        let mut values = vec![CellValue::Null; lane_count];

        match &self.reducer {
            Reducer::Lane(f) => {
                for &lane in lanes {
                    let numbers: Vec<f64> = cross
                        .iter()
                        .filter_map(|&other| {
                            let (r, c) = match self.axis {
                                Axis::Rows => (other, lane),
                                Axis::Columns => (lane, other),
                            };
                            frame.get(r, c).ok()
                        })
                        .filter(|cell| cell.is_numeric())
                        .filter_map(CellValue::as_number)
                        .collect();
                    if !numbers.is_empty() {
                        values[lane] = CellValue::Float(f(&numbers));
                    }
                }
            }
            Reducer::Frame(f) => {
                let slice = restrict(frame, &rows, &cols)?;
                match f(&slice, self.axis) {
                    Reduced::Scalar(value) => {
                        if let Some(&first) = lanes.first() {
                            values[first] = CellValue::Float(value);
                        }
                    }
                    Reduced::Vector(result) => {
                        if result.len() != lanes.len() {
                            return Err(SummaryError::ShapeMismatch {
                                title: self.title.clone(),
                                expected: lanes.len(),
                                actual: result.len(),
                            });
                        }
                        for (&lane, value) in lanes.iter().zip(result) {
                            values[lane] = CellValue::Float(value);
                        }
                    }
                }
            }
        }

        tracing::trace!(title = %self.title, axis = %self.axis, lanes = lanes.len(), "summary applied");
        Ok(SummaryLine {
            title: self.title.clone(),
            axis: self.axis,
            values,
        })
    }
}

/// The part of `frame` at the given positions; borrowed when that is all of it.
fn restrict<'a>(frame: &'a Frame, rows: &[usize], cols: &[usize]) -> Result<Cow<'a, Frame>> {
    if rows.len() == frame.row_count() && cols.len() == frame.col_count() {
        return Ok(Cow::Borrowed(frame));
    }
    let columns = cols.iter().map(|&c| frame.columns()[c].clone()).collect();
    let index: Vec<Label> = rows.iter().map(|&r| frame.index()[r].clone()).collect();
    let data = rows
        .iter()
        .map(|&r| {
            cols.iter()
                .map(|&c| frame.get(r, c).cloned())
                .collect::<prettyframe_frame::Result<Vec<_>>>()
        })
        .collect::<prettyframe_frame::Result<Vec<_>>>()?;
    Ok(Cow::Owned(Frame::new(columns, index, data)?))
}

/// Titles made unique by suffixing repeats with `_1`, `_2`, ...
pub(crate) fn unique_titles<'a, I>(titles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for title in titles {
        let mut candidate = title.to_string();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{title}_{n}");
            n += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::from_rows(
            &["A", "B", "C"],
            vec![
                vec![CellValue::Int(1), CellValue::Float(2.0), CellValue::from("x")],
                vec![CellValue::Int(3), CellValue::Null, CellValue::from("y")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_sum_rows_skips_missing_and_text() {
        let line = Aggregate::new("Total", Reducer::sum(), Axis::Rows)
            .apply(&sample())
            .unwrap();
        assert_eq!(
            line.values,
            vec![CellValue::Float(4.0), CellValue::Float(2.0), CellValue::Null]
        );
    }

    #[test]
    fn test_sum_columns() {
        let line = Aggregate::new("Total", Reducer::sum(), Axis::Columns)
            .apply(&sample())
            .unwrap();
        assert_eq!(line.values, vec![CellValue::Float(3.0), CellValue::Float(3.0)]);
    }

    #[test]
    fn test_column_subset_leaves_other_lanes_missing() {
        let line = Aggregate::new("Total", Reducer::sum(), Axis::Rows)
            .with_subset(Subset::columns(["B"]))
            .unwrap()
            .apply(&sample())
            .unwrap();
        assert_eq!(
            line.values,
            vec![CellValue::Null, CellValue::Float(2.0), CellValue::Null]
        );
    }

    #[test]
    fn test_row_subset_restricts_input() {
        let line = Aggregate::new("Total", Reducer::sum(), Axis::Rows)
            .with_subset(Subset::rows([1]))
            .unwrap()
            .apply(&sample())
            .unwrap();
        assert_eq!(line.values[0], CellValue::Float(3.0));
        assert_eq!(line.values[1], CellValue::Null);
    }

    #[test]
    fn test_mask_subset_rejected() {
        let err = Aggregate::new("Total", Reducer::sum(), Axis::Rows)
            .with_subset(Subset::Mask(vec![vec![true]]))
            .unwrap_err();
        assert!(matches!(err, SummaryError::InvalidSubset(_)));
    }

    #[test]
    fn test_frame_reducer_scalar_goes_first() {
        let count = Reducer::frame(|f: &Frame, _| (f.row_count() * f.col_count()) as f64);
        let line = Aggregate::new("Cells", count, Axis::Rows)
            .with_subset(Subset::columns(["B", "C"]))
            .unwrap()
            .apply(&sample())
            .unwrap();
        assert_eq!(
            line.values,
            vec![CellValue::Null, CellValue::Float(4.0), CellValue::Null]
        );
    }

    #[test]
    fn test_frame_reducer_vector_length_checked() {
        let bad = Reducer::frame(|_: &Frame, _| vec![1.0]);
        let err = Aggregate::new("Bad", bad, Axis::Rows)
            .apply(&sample())
            .unwrap_err();
        assert!(matches!(
            err,
            SummaryError::ShapeMismatch {
                expected: 3,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_unique_titles() {
        let titles = unique_titles(["Total", "Total", "Mean", "Total", "Total_1"]);
        assert_eq!(titles, vec!["Total", "Total_1", "Mean", "Total_2", "Total_1_1"]);
    }
}
