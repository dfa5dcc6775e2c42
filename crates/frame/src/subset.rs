//! Cell selection over a frame.

use crate::cell::CellValue;
use crate::error::{FrameError, Result};
use crate::frame::Frame;
use crate::label::Label;
use std::fmt;
use std::sync::Arc;

/// Predicate over `(row label, column name, value)`.
pub type CellPredicate = Arc<dyn Fn(&Label, &str, &CellValue) -> bool + Send + Sync>;

/// A selection of cells in a frame.
///
/// `All`, `Rows`, `Columns` and `Region` are rectangular. `Mask` and `Where`
/// select individual cells and are resolved against whatever frame they are
/// applied to.
#[derive(Clone, Default)]
pub enum Subset {
    #[default]
    All,
    Rows(Vec<Label>),
    Columns(Vec<String>),
    Region {
        rows: Vec<Label>,
        columns: Vec<String>,
    },
    /// Row-major boolean grid; must match the frame's shape.
    Mask(Vec<Vec<bool>>),
    Where(CellPredicate),
}

impl Subset {
    /// Select the named columns
    pub fn columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Subset::Columns(names.into_iter().map(Into::into).collect())
    }

    /// Select the labeled rows
    pub fn rows<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        Subset::Rows(labels.into_iter().map(Into::into).collect())
    }

    /// Select the cells where `f(label, column, value)` holds
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Label, &str, &CellValue) -> bool + Send + Sync + 'static,
    {
        Subset::Where(Arc::new(f))
    }

    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        !matches!(self, Subset::Mask(_) | Subset::Where(_))
    }

    /// Row and column positions of a rectangular subset, in frame order.
    pub fn region(&self, frame: &Frame) -> Result<(Vec<usize>, Vec<usize>)> {
        let all_rows = || (0..frame.row_count()).collect::<Vec<_>>();
        let all_cols = || (0..frame.col_count()).collect::<Vec<_>>();

        match self {
            Subset::All => Ok((all_rows(), all_cols())),
            Subset::Rows(labels) => Ok((row_positions(frame, labels)?, all_cols())),
            Subset::Columns(names) => Ok((all_rows(), column_positions(frame, names)?)),
            Subset::Region { rows, columns } => Ok((
                row_positions(frame, rows)?,
                column_positions(frame, columns)?,
            )),
            Subset::Mask(_) | Subset::Where(_) => Err(FrameError::NotRectangular),
        }
    }

    /// All selected `(row, col)` positions in row-major order.
    pub fn resolve(&self, frame: &Frame) -> Result<Vec<(usize, usize)>> {
        match self {
            Subset::Mask(mask) => {
                let shape_ok = mask.len() == frame.row_count()
                    && mask.iter().all(|row| row.len() == frame.col_count());
                if !shape_ok {
                    return Err(FrameError::ShapeMismatch {
                        expected_rows: frame.row_count(),
                        expected_cols: frame.col_count(),
                        rows: mask.len(),
                        cols: mask.first().map_or(0, Vec::len),
                    });
                }
                Ok(mask
                    .iter()
                    .enumerate()
                    .flat_map(|(r, row)| {
                        row.iter()
                            .enumerate()
                            .filter(|(_, hit)| **hit)
                            .map(move |(c, _)| (r, c))
                    })
                    .collect())
            }
            Subset::Where(predicate) => {
                let mut cells = Vec::new();
                for (r, (label, values)) in frame.rows().enumerate() {
                    for (c, (name, value)) in frame.columns().iter().zip(values).enumerate() {
                        if predicate(label, name, value) {
                            cells.push((r, c));
                        }
                    }
                }
                Ok(cells)
            }
            _ => {
                let (rows, cols) = self.region(frame)?;
                let mut cells: Vec<(usize, usize)> = rows
                    .iter()
                    .flat_map(|&r| cols.iter().map(move |&c| (r, c)))
                    .collect();
                cells.sort_unstable();
                cells.dedup();
                Ok(cells)
            }
        }
    }
}

/// Rows are matched on every position carrying the label, so duplicate
/// labels are all selected.
fn row_positions(frame: &Frame, labels: &[Label]) -> Result<Vec<usize>> {
    let mut positions = Vec::new();
    for label in labels {
        frame.require_row(label)?;
        positions.extend(
            frame
                .index()
                .iter()
                .enumerate()
                .filter(|(_, l)| l.matches(label))
                .map(|(i, _)| i),
        );
    }
    positions.sort_unstable();
    positions.dedup();
    Ok(positions)
}

fn column_positions(frame: &Frame, names: &[String]) -> Result<Vec<usize>> {
    let mut positions = Vec::new();
    for name in names {
        frame.require_column(name)?;
        positions.extend(
            frame
                .columns()
                .iter()
                .enumerate()
                .filter(|(_, n)| *n == name)
                .map(|(i, _)| i),
        );
    }
    positions.sort_unstable();
    positions.dedup();
    Ok(positions)
}

impl fmt::Debug for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subset::All => write!(f, "All"),
            Subset::Rows(rows) => f.debug_tuple("Rows").field(rows).finish(),
            Subset::Columns(cols) => f.debug_tuple("Columns").field(cols).finish(),
            Subset::Region { rows, columns } => f
                .debug_struct("Region")
                .field("rows", rows)
                .field("columns", columns)
                .finish(),
            Subset::Mask(mask) => f.debug_tuple("Mask").field(mask).finish(),
            Subset::Where(_) => write!(f, "Where(<predicate>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::from_rows(&["A", "B", "C"], vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_columns_subset() {
        let cells = Subset::columns(["C", "A"]).resolve(&sample()).unwrap();
        assert_eq!(cells, vec![(0, 0), (0, 2), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_region_subset() {
        let subset = Subset::Region {
            rows: vec![Label::from(1)],
            columns: vec!["B".to_string()],
        };
        assert_eq!(subset.resolve(&sample()).unwrap(), vec![(1, 1)]);
    }

    #[test]
    fn test_unknown_column() {
        let result = Subset::columns(["Z"]).resolve(&sample());
        assert!(matches!(result, Err(FrameError::ColumnNotFound { .. })));
    }

    #[test]
    fn test_mask_shape_checked() {
        let bad = Subset::Mask(vec![vec![true]]);
        assert!(matches!(
            bad.resolve(&sample()),
            Err(FrameError::ShapeMismatch { .. })
        ));
        let good = Subset::Mask(vec![vec![false, true, false], vec![true, false, false]]);
        assert_eq!(good.resolve(&sample()).unwrap(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_predicate() {
        let subset = Subset::predicate(|_, _, v| v.as_number().is_some_and(|n| n > 4.0));
        assert_eq!(subset.resolve(&sample()).unwrap(), vec![(1, 1), (1, 2)]);
        assert!(!subset.is_rectangular());
        assert!(matches!(
            subset.region(&sample()),
            Err(FrameError::NotRectangular)
        ));
    }
}
