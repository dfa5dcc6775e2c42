//! Error types for prettyframe.

use prettyframe_formatting::FormatError;
use prettyframe_frame::FrameError;
use thiserror::Error;

/// Result type for summarizer operations.
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Errors raised while registering or materializing summaries and formatters.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Axis token other than rows/index/0, columns/1 or both/none.
    #[error("Invalid axis '{0}': expected 'rows', 'index', '0', 'columns', '1', 'both' or 'none'")]
    InvalidAxis(String),

    /// Subset that cannot be used where it was given.
    #[error("Invalid subset: {0}")]
    InvalidSubset(String),

    /// Row and column summaries on a frame with multi-level row labels.
    #[error("Cannot add row and column summaries to a frame with {levels}-level row labels")]
    MultiLevelConflict { levels: usize },

    /// A reducer returned the wrong number of values.
    #[error("Summary '{title}' produced {actual} values, expected {expected}")]
    ShapeMismatch {
        title: String,
        expected: usize,
        actual: usize,
    },

    /// A formatter failed on a cell while rendering.
    #[error("Formatting failed at row '{row}', column '{column}': {source}")]
    Format {
        row: String,
        column: String,
        #[source]
        source: FormatError,
    },

    /// A formatter could not be built from its options.
    #[error("Invalid formatter: {0}")]
    Formatter(#[from] FormatError),

    /// Frame construction or lookup error.
    #[error("Frame error: {0}")]
    Frame(#[from] FrameError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        SummaryError::Config(err.to_string())
    }
}
