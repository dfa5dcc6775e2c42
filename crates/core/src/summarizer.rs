//! The summary builder.

use crate::aggregate::{unique_titles, Aggregate};
use crate::axis::{Axis, AxisSpec};
use crate::binding::FormatterBinding;
use crate::config::StyleConfig;
use crate::error::{Result, SummaryError};
use crate::reducer::Reducer;
use prettyframe_formatting::{
    CellFormatter, CurrencyFormat, Locale, Location, PercentFormat, UnitFormat,
};
use prettyframe_frame::{CellValue, Frame, Label, Subset};
use std::fmt;
use std::sync::Arc;

/// Decimals used by unit formatters when neither the call nor the config
/// gives a precision.
pub const DEFAULT_UNIT_PRECISION: usize = 2;

/// Options shared by the summary-adding calls.
#[derive(Debug, Clone, Default)]
pub struct SummaryOptions {
    title: Option<String>,
    axis: AxisSpec,
    subset: Subset,
}

impl SummaryOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn axis(mut self, axis: impl Into<AxisSpec>) -> Self {
        self.axis = axis.into();
        self
    }

    #[must_use]
    pub fn subset(mut self, subset: Subset) -> Self {
        self.subset = subset;
        self
    }
}

/// Summaries and formatters over an unchanging base frame.
///
/// Every adding call returns a new summarizer; `self` is left as it was.
/// Nothing is computed until [`to_frame`](Summarizer::to_frame),
/// [`style`](Summarizer::style) or [`render`](Summarizer::render).
///
/// ```
/// use prettyframe_core::{Summarizer, SummaryOptions};
/// use prettyframe_frame::{CellValue, Frame};
///
/// let frame = Frame::from_rows(&["A", "B"], vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let summary = Summarizer::new(frame).total(SummaryOptions::new()).unwrap();
///
/// let out = summary.to_frame().unwrap();
/// assert_eq!(out.row_count(), 3);
/// assert_eq!(out.get(2, 0).unwrap(), &CellValue::Float(4.0));
/// ```
#[derive(Debug, Clone)]
pub struct Summarizer {
    base: Arc<Frame>,
    summary_rows: Vec<Aggregate>,
    summary_cols: Vec<Aggregate>,
    formatters: Vec<FormatterBinding>,
    config: StyleConfig,
}

/// A summarized frame plus where its summary lines sit.
pub(crate) struct Materialized {
    pub frame: Frame,
    pub base_rows: usize,
    pub base_cols: usize,
}

impl Summarizer {
    pub fn new(frame: Frame) -> Self {
        Self::from_arc(Arc::new(frame))
    }

    /// Share an existing frame without copying it.
    pub fn from_arc(frame: Arc<Frame>) -> Self {
        Self {
            base: frame,
            summary_rows: Vec::new(),
            summary_cols: Vec::new(),
            formatters: Vec::new(),
            config: StyleConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(&self, config: StyleConfig) -> Self {
        Self {
            config,
            ..self.clone()
        }
    }

    // ========================================================================
    // Summaries
    // ========================================================================

    /// Add a summary computed by `reducer`. Titled "Total" unless
    /// `options` says otherwise.
    pub fn summary(&self, reducer: Reducer, options: SummaryOptions) -> Result<Self> {
        let title = options.title.clone().unwrap_or_else(|| "Total".to_string());
        self.multi_summary(&[(reducer, title.as_str())], options)
    }

    /// Add several summaries at once, in order. With [`AxisSpec::Both`] all
    /// row summaries are added before any column summary.
    pub fn multi_summary(&self, reducers: &[(Reducer, &str)], options: SummaryOptions) -> Result<Self> {
        let mut next = self.clone();
        for &axis in options.axis.axes() {
            for (reducer, title) in reducers {
                let aggregate =
                    Aggregate::new(*title, reducer.clone(), axis).with_subset(options.subset.clone())?;
                match axis {
                    Axis::Rows => next.summary_rows.push(aggregate),
                    Axis::Columns => next.summary_cols.push(aggregate),
                }
            }
        }
        Ok(next)
    }

    pub fn total(&self, options: SummaryOptions) -> Result<Self> {
        self.named_summary(Reducer::sum(), "Total", options)
    }

    pub fn average(&self, options: SummaryOptions) -> Result<Self> {
        self.named_summary(Reducer::mean(), "Average", options)
    }

    pub fn median(&self, options: SummaryOptions) -> Result<Self> {
        self.named_summary(Reducer::median(), "Median", options)
    }

    pub fn max(&self, options: SummaryOptions) -> Result<Self> {
        self.named_summary(Reducer::max(), "Maximum", options)
    }

    pub fn min(&self, options: SummaryOptions) -> Result<Self> {
        self.named_summary(Reducer::min(), "Minimum", options)
    }

    fn named_summary(&self, reducer: Reducer, default_title: &str, options: SummaryOptions) -> Result<Self> {
        let options = match options.title {
            Some(_) => options,
            None => options.title(default_title),
        };
        self.summary(reducer, options)
    }

    // ========================================================================
    // Formatters
    // ========================================================================

    /// Show `subset` as percentages, `1.0` being `100%`.
    pub fn as_percent(&self, subset: Subset, precision: usize) -> Result<Self> {
        Ok(self.format_with(subset, PercentFormat::new(precision)?))
    }

    /// Show `subset` as money in `currency`. Without a locale the
    /// process-wide default is used when rendering.
    #[must_use]
    pub fn as_currency(&self, subset: Subset, currency: &str, locale: Option<Locale>) -> Self {
        let formatter = match locale {
            Some(locale) => CurrencyFormat::new(currency).locale(locale),
            None => CurrencyFormat::new(currency),
        };
        self.format_with(subset, formatter)
    }

    /// Show `subset` with a unit before or after the number.
    pub fn as_unit(
        &self,
        subset: Subset,
        unit: &str,
        precision: Option<usize>,
        location: Location,
    ) -> Result<Self> {
        let formatter = UnitFormat::new(unit, self.unit_precision(precision), location)?;
        Ok(self.format_with(subset, formatter))
    }

    /// Like [`as_percent`](Summarizer::as_percent) with a fully built
    /// formatter, for the input scale and `na_rep`.
    #[must_use]
    pub fn as_percent_with(&self, subset: Subset, format: PercentFormat) -> Self {
        self.format_with(subset, format)
    }

    /// Like [`as_currency`](Summarizer::as_currency) with a fully built
    /// formatter.
    #[must_use]
    pub fn as_currency_with(&self, subset: Subset, format: CurrencyFormat) -> Self {
        self.format_with(subset, format)
    }

    /// Like [`as_unit`](Summarizer::as_unit) with a fully built formatter,
    /// for the thousands separator and `na_rep`.
    #[must_use]
    pub fn as_unit_with(&self, subset: Subset, format: UnitFormat) -> Self {
        self.format_with(subset, format)
    }

    /// Show `subset` as money with a literal symbol.
    #[deprecated(note = "use as_currency, which follows locale conventions")]
    pub fn as_money(
        &self,
        subset: Subset,
        precision: Option<usize>,
        symbol: &str,
        location: Location,
    ) -> Result<Self> {
        #[allow(deprecated)]
        let formatter = prettyframe_formatting::as_money(self.unit_precision(precision), symbol, location)?;
        Ok(self.format_with(subset, formatter))
    }

    /// Apply any formatter to `subset`. Later formatters win where subsets
    /// overlap.
    #[must_use]
    pub fn format_with<F>(&self, subset: Subset, formatter: F) -> Self
    where
        F: CellFormatter + 'static,
    {
        self.bind(FormatterBinding::new(Arc::new(formatter), subset))
    }

    /// Apply a shared formatter to `subset`.
    #[must_use]
    pub fn bind(&self, binding: FormatterBinding) -> Self {
        let mut next = self.clone();
        next.formatters.push(binding);
        next
    }

    fn unit_precision(&self, precision: Option<usize>) -> usize {
        precision
            .or(self.config.precision)
            .unwrap_or(DEFAULT_UNIT_PRECISION)
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// The base frame with every summary row and column attached.
    ///
    /// Computed afresh on every call.
    pub fn to_frame(&self) -> Result<Frame> {
        Ok(self.materialize()?.frame)
    }

    pub(crate) fn materialize(&self) -> Result<Materialized> {
        let base = self.base.as_ref();
        if base.is_multi_level() && !self.summary_rows.is_empty() && !self.summary_cols.is_empty() {
            return Err(SummaryError::MultiLevelConflict {
                levels: base.index_levels(),
            });
        }

        let row_lines = apply_all(&self.summary_rows, base)?;
        let col_lines = apply_all(&self.summary_cols, base)?;
        let mut frame = base.clone();

        if !col_lines.is_empty() {
            let data = (0..base.row_count())
                .map(|r| col_lines.iter().map(|(_, values)| values[r].clone()).collect())
                .collect();
            let titles = col_lines.iter().map(|(title, _)| title.clone()).collect();
            let extra = Frame::new(titles, base.index().to_vec(), data)?;
            frame = frame.concat_columns(&extra)?;
        }

        if !row_lines.is_empty() {
            let levels = base.index_levels();
            let mut labels = Vec::with_capacity(row_lines.len());
            let mut data = Vec::with_capacity(row_lines.len());
            for (title, mut values) in row_lines {
                values.extend(std::iter::repeat_with(CellValue::blank).take(col_lines.len()));
                labels.push(Label::padded(title, levels));
                data.push(values);
            }
            let extra = Frame::new(frame.columns().to_vec(), labels, data)?;
            frame = frame.concat_rows(&extra)?;
        }

        tracing::debug!(
            summary_rows = self.summary_rows.len(),
            summary_cols = self.summary_cols.len(),
            shape = ?frame.shape(),
            "materialized summaries"
        );
        Ok(Materialized {
            frame,
            base_rows: base.row_count(),
            base_cols: base.col_count(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn base(&self) -> &Frame {
        &self.base
    }

    pub fn summary_rows(&self) -> &[Aggregate] {
        &self.summary_rows
    }

    pub fn summary_cols(&self) -> &[Aggregate] {
        &self.summary_cols
    }

    pub fn formatters(&self) -> &[FormatterBinding] {
        &self.formatters
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }
}

/// Evaluate aggregates against the base frame, deduplicating titles.
fn apply_all(aggregates: &[Aggregate], base: &Frame) -> Result<Vec<(String, Vec<CellValue>)>> {
    let titles = unique_titles(aggregates.iter().map(Aggregate::title));
    aggregates
        .iter()
        .zip(titles)
        .map(|(aggregate, title)| {
            let line = aggregate.retitled(title).apply(base)?;
            Ok((line.title, line.values))
        })
        .collect()
}

/// Start a [`Summarizer`] straight from a frame.
pub trait Summarize {
    fn summarize(self) -> Summarizer;
}

impl Summarize for Frame {
    fn summarize(self) -> Summarizer {
        Summarizer::new(self)
    }
}

impl Summarize for Arc<Frame> {
    fn summarize(self) -> Summarizer {
        Summarizer::from_arc(self)
    }
}

impl From<Frame> for Summarizer {
    fn from(frame: Frame) -> Self {
        Self::new(frame)
    }
}

impl fmt::Display for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_frame() {
            Ok(frame) => write!(f, "{frame}"),
            Err(err) => write!(f, "<summary error: {err}>"),
        }
    }
}
