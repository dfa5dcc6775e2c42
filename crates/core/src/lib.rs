//! # prettyframe-core
//!
//! Summary rows and columns plus per-cell display formatting for
//! [`Frame`](prettyframe_frame::Frame)s.
//!
//! This crate provides:
//! - [`Summarizer`], an immutable builder of summaries and formatters
//! - [`Aggregate`] and [`Reducer`] for computing summary lines
//! - [`StyledFrame`] with HTML rendering
//! - [`StyleConfig`] and the CSS helpers used by the renderer

/// Summary requests and their evaluation.
pub mod aggregate;
/// Summary directions.
pub mod axis;
/// Formatter bindings.
pub mod binding;
/// Render configuration.
pub mod config;
/// CSS rules and the page-wide stylesheet.
pub mod css;
/// Error types and result aliases.
pub mod error;
/// Reduction functions.
pub mod reducer;
/// Styled view and HTML output.
pub mod style;
/// The summary builder.
pub mod summarizer;

pub use aggregate::{Aggregate, SummaryLine};
pub use axis::{Axis, AxisSpec};
pub use binding::FormatterBinding;
pub use config::{FormatErrorPolicy, StyleConfig};
pub use css::{pretty_globals, TableStyle};
pub use error::{Result, SummaryError};
pub use reducer::{Reduced, Reducer};
pub use style::{HeaderCell, StyledCell, StyledFrame, StyledRow};
pub use summarizer::{Summarize, Summarizer, SummaryOptions, DEFAULT_UNIT_PRECISION};
