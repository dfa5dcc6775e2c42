use crate::error::{Result, SparklineError};
use crate::multi::MultiSparkline;
use crate::templates::{environment, LINE_TEMPLATE, SINGLE_TEMPLATE};
use serde::Serialize;
use std::ops::Add;

pub const DEFAULT_WIDTH: u32 = 150;
pub const DEFAULT_HEIGHT: u32 = 20;
pub const DEFAULT_OFFSET: f64 = 2.5;
pub const DEFAULT_MAX_COLOR: &str = "#8ca252";
pub const DEFAULT_MIN_COLOR: &str = "#ff0000";
pub const DEFAULT_LINE_COLOR: &str = "black";

/// A point on the SVG canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A small line chart of a series, rendered as SVG.
///
/// Maxima are marked with green dots and minima with red ones. With both
/// markers turned off the last point gets a dot instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    data: Vec<f64>,
    width: u32,
    height: u32,
    height_offset: f64,
    width_offset: f64,
    show_max: bool,
    show_min: bool,
    max_color: String,
    min_color: String,
    line_color: String,
    ymin: Option<f64>,
    ymax: Option<f64>,
}

#[derive(Serialize)]
struct LineContext<'a> {
    width: u32,
    height: u32,
    height_offset: f64,
    points: Vec<Point>,
    end_point: Option<Point>,
    maxs: Vec<Point>,
    mins: Vec<Point>,
    max_color: &'a str,
    min_color: &'a str,
    line_color: &'a str,
}

impl Sparkline {
    /// A sparkline with default size and colours.
    pub fn new<I>(data: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let data: Vec<f64> = data.into_iter().collect();
        if data.is_empty() {
            return Err(SparklineError::Empty);
        }
        if let Some(index) = data.iter().position(|v| !v.is_finite()) {
            return Err(SparklineError::NonFinite { index });
        }
        Ok(Self {
            data,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            height_offset: DEFAULT_OFFSET,
            width_offset: DEFAULT_OFFSET,
            show_max: true,
            show_min: true,
            max_color: DEFAULT_MAX_COLOR.to_string(),
            min_color: DEFAULT_MIN_COLOR.to_string(),
            line_color: DEFAULT_LINE_COLOR.to_string(),
            ymin: None,
            ymax: None,
        })
    }

    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Gap between the line and the top and bottom edges; also the marker radius.
    #[must_use]
    pub fn height_offset(mut self, offset: f64) -> Self {
        self.height_offset = offset;
        self
    }

    #[must_use]
    pub fn width_offset(mut self, offset: f64) -> Self {
        self.width_offset = offset;
        self
    }

    #[must_use]
    pub fn show_max(mut self, show: bool) -> Self {
        self.show_max = show;
        self
    }

    #[must_use]
    pub fn show_min(mut self, show: bool) -> Self {
        self.show_min = show;
        self
    }

    #[must_use]
    pub fn max_color(mut self, color: impl Into<String>) -> Self {
        self.max_color = color.into();
        self
    }

    #[must_use]
    pub fn min_color(mut self, color: impl Into<String>) -> Self {
        self.min_color = color.into();
        self
    }

    #[must_use]
    pub fn line_color(mut self, color: impl Into<String>) -> Self {
        self.line_color = color.into();
        self
    }

    /// Fix the bottom of the y range instead of using the data minimum.
    #[must_use]
    pub fn ymin(mut self, ymin: f64) -> Self {
        self.ymin = Some(ymin);
        self
    }

    /// Fix the top of the y range instead of using the data maximum.
    #[must_use]
    pub fn ymax(mut self, ymax: f64) -> Self {
        self.ymax = Some(ymax);
        self
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Canvas `(width, height)`
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn data_max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    fn data_min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Canvas coordinates of every value.
    ///
    /// x runs evenly from `width_offset` to `width - 2 * width_offset`.
    /// A flat series is drawn across the middle.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        let n = self.data.len();
        let start = self.width_offset;
        let stop = f64::from(self.width) - 2.0 * self.width_offset;
        let step = if n > 1 { (stop - start) / (n - 1) as f64 } else { 0.0 };

        let lo = self.ymin.unwrap_or_else(|| self.data_min());
        let hi = self.ymax.unwrap_or_else(|| self.data_max());
        let span = hi - lo;
        let inner = f64::from(self.height) - 2.0 * self.height_offset;

        self.data
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let scaled = if span == 0.0 { 0.5 } else { (v - lo) / span };
                Point {
                    x: tidy(start + step * i as f64),
                    y: tidy(inner - inner * scaled + self.height_offset),
                }
            })
            .collect()
    }

    fn marked(&self, points: &[Point], target: f64) -> Vec<Point> {
        self.data
            .iter()
            .zip(points)
            .filter(|(v, _)| **v == target)
            .map(|(_, p)| *p)
            .collect()
    }

    fn context(&self, markers: bool) -> LineContext<'_> {
        let points = self.points();
        let maxs = if markers && self.show_max {
            self.marked(&points, self.data_max())
        } else {
            Vec::new()
        };
        let mins = if markers && self.show_min {
            self.marked(&points, self.data_min())
        } else {
            Vec::new()
        };
        let end_point = if markers && !self.show_max && !self.show_min {
            points.last().copied()
        } else {
            None
        };
        LineContext {
            width: self.width,
            height: self.height,
            height_offset: self.height_offset,
            points,
            end_point,
            maxs,
            mins,
            max_color: &self.max_color,
            min_color: &self.min_color,
            line_color: &self.line_color,
        }
    }

    /// Full `<svg>` element.
    pub fn render(&self) -> Result<String> {
        let env = environment()?;
        let svg = env.get_template(SINGLE_TEMPLATE)?.render(self.context(true))?;
        tracing::trace!(points = self.data.len(), "rendered sparkline");
        Ok(svg)
    }

    /// Just the line, without markers or the `<svg>` wrapper.
    pub(crate) fn render_line(&self) -> Result<String> {
        let env = environment()?;
        Ok(env.get_template(LINE_TEMPLATE)?.render(self.context(false))?)
    }
}

/// Round to 3 decimals to keep the SVG short.
fn tidy(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

impl Add for Sparkline {
    type Output = Result<MultiSparkline>;

    fn add(self, other: Sparkline) -> Self::Output {
        MultiSparkline::new().push(self)?.push(other)
    }
}

impl Add<MultiSparkline> for Sparkline {
    type Output = Result<MultiSparkline>;

    fn add(self, other: MultiSparkline) -> Self::Output {
        MultiSparkline::new().push(self)?.extend(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_span_canvas() {
        let line = Sparkline::new([0.0, 5.0, 10.0]).unwrap();
        let points = line.points();
        assert_eq!(points[0], Point { x: 2.5, y: 17.5 });
        assert_eq!(points[1], Point { x: 73.75, y: 10.0 });
        assert_eq!(points[2], Point { x: 145.0, y: 2.5 });
    }

    #[test]
    fn test_flat_series_is_centered() {
        let line = Sparkline::new([3.0, 3.0]).unwrap();
        assert!(line.points().iter().all(|p| p.y == 10.0));
    }

    #[test]
    fn test_fixed_range() {
        let line = Sparkline::new([5.0]).unwrap().ymin(0.0).ymax(10.0);
        assert_eq!(line.points()[0], Point { x: 2.5, y: 10.0 });
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(Sparkline::new(Vec::<f64>::new()), Err(SparklineError::Empty)));
        assert!(matches!(
            Sparkline::new([1.0, f64::NAN]),
            Err(SparklineError::NonFinite { index: 1 })
        ));
    }
}
