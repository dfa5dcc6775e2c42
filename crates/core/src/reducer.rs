//! Reduction functions used by summaries.

use crate::axis::Axis;
use prettyframe_frame::Frame;
use std::fmt;
use std::sync::Arc;

/// Function over the present numeric values of one lane.
pub type LaneFn = dyn Fn(&[f64]) -> f64 + Send + Sync;

/// Function over a whole (subset-restricted) frame.
pub type FrameFn = dyn Fn(&Frame, Axis) -> Reduced + Send + Sync;

/// Output of a frame reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduced {
    /// One value, placed in the first lane of the summary.
    Scalar(f64),
    /// One value per lane, in lane order.
    Vector(Vec<f64>),
}

impl From<f64> for Reduced {
    fn from(value: f64) -> Self {
        Reduced::Scalar(value)
    }
}

impl From<Vec<f64>> for Reduced {
    fn from(values: Vec<f64>) -> Self {
        Reduced::Vector(values)
    }
}

/// How a summary turns data into values.
///
/// A lane is a column when summarizing along [`Axis::Rows`] and a row along
/// [`Axis::Columns`].
#[derive(Clone)]
pub enum Reducer {
    /// Called once per lane with that lane's numeric cells. Never called
    /// with an empty slice.
    Lane(Arc<LaneFn>),
    /// Called once with the restricted frame.
    Frame(Arc<FrameFn>),
}

impl Reducer {
    pub fn lane<F>(f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Reducer::Lane(Arc::new(f))
    }

    pub fn frame<F, R>(f: F) -> Self
    where
        F: Fn(&Frame, Axis) -> R + Send + Sync + 'static,
        R: Into<Reduced>,
    {
        Reducer::Frame(Arc::new(move |frame, axis| f(frame, axis).into()))
    }

    #[must_use]
    pub fn sum() -> Self {
        Self::lane(|values| values.iter().sum())
    }

    #[must_use]
    pub fn mean() -> Self {
        Self::lane(|values| values.iter().sum::<f64>() / values.len() as f64)
    }

    #[must_use]
    pub fn median() -> Self {
        Self::lane(median)
    }

    #[must_use]
    pub fn max() -> Self {
        Self::lane(|values| values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }

    #[must_use]
    pub fn min() -> Self {
        Self::lane(|values| values.iter().copied().fold(f64::INFINITY, f64::min))
    }
}

impl fmt::Debug for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reducer::Lane(_) => write!(f, "Reducer::Lane"),
            Reducer::Frame(_) => write!(f, "Reducer::Frame"),
        }
    }
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(reducer: &Reducer, values: &[f64]) -> f64 {
        match reducer {
            Reducer::Lane(f) => f(values),
            Reducer::Frame(_) => unreachable!(),
        }
    }

    #[test]
    fn test_builtin_reducers() {
        let values = [3.0, 1.0, 4.0, 1.5];
        assert_eq!(run(&Reducer::sum(), &values), 9.5);
        assert_eq!(run(&Reducer::mean(), &values), 2.375);
        assert_eq!(run(&Reducer::median(), &values), 2.25);
        assert_eq!(run(&Reducer::max(), &values), 4.0);
        assert_eq!(run(&Reducer::min(), &values), 1.0);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
    }

    #[test]
    fn test_frame_reducer_into_reduced() {
        let reducer = Reducer::frame(|frame: &Frame, _| frame.row_count() as f64);
        let frame = Frame::from_series("x", vec![1, 2]).unwrap();
        match reducer {
            Reducer::Frame(f) => assert_eq!(f(&frame, Axis::Rows), Reduced::Scalar(2.0)),
            Reducer::Lane(_) => unreachable!(),
        }
    }
}
