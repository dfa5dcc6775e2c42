use crate::error::{Result, SparklineError};
use crate::sparkline::Sparkline;
use crate::templates::{environment, MULTI_TEMPLATE};
use std::ops::Add;

/// Several sparklines drawn over each other on one canvas.
///
/// Usually built with `+`:
///
/// ```
/// use prettyframe_sparkline::Sparkline;
///
/// let a = Sparkline::new([1.0, 3.0, 2.0]).unwrap();
/// let b = Sparkline::new([2.0, 1.0, 3.0]).unwrap().line_color("blue");
/// let both = (a + b).unwrap();
///
/// assert_eq!(both.len(), 2);
/// assert_eq!(both.render().unwrap().matches("<polyline").count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiSparkline {
    lines: Vec<Sparkline>,
}

impl MultiSparkline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line. Its size must match the lines already present.
    pub fn push(mut self, line: Sparkline) -> Result<Self> {
        if let Some(size) = self.size() {
            if size != line.size() {
                return Err(SparklineError::SizeMismatch {
                    left: size,
                    right: line.size(),
                });
            }
        }
        self.lines.push(line);
        Ok(self)
    }

    /// Add every line of `other`.
    pub fn extend(self, other: MultiSparkline) -> Result<Self> {
        other.lines.into_iter().try_fold(self, MultiSparkline::push)
    }

    pub fn lines(&self) -> &[Sparkline] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Canvas size shared by all lines; `None` when empty.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.lines.first().map(Sparkline::size)
    }

    /// One `<svg>` holding every line, without min/max markers.
    pub fn render(&self) -> Result<String> {
        let (width, height) = self.size().unwrap_or((0, 0));
        let lines = self
            .lines
            .iter()
            .map(Sparkline::render_line)
            .collect::<Result<Vec<_>>>()?;
        let env = environment()?;
        let svg = env.get_template(MULTI_TEMPLATE)?.render(minijinja::context! {
            width => width,
            height => height,
            lines => lines,
        })?;
        Ok(svg)
    }
}

impl Add<Sparkline> for MultiSparkline {
    type Output = Result<MultiSparkline>;

    fn add(self, other: Sparkline) -> Self::Output {
        self.push(other)
    }
}

impl Add for MultiSparkline {
    type Output = Result<MultiSparkline>;

    fn add(self, other: MultiSparkline) -> Self::Output {
        self.extend(other)
    }
}

impl From<Sparkline> for MultiSparkline {
    fn from(line: Sparkline) -> Self {
        Self { lines: vec![line] }
    }
}
