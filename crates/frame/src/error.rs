use thiserror::Error;

/// Errors that can occur during frame operations
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Row label has {actual} levels, frame index has {expected}")]
    LevelMismatch { expected: usize, actual: usize },

    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("Row not found: {label}")]
    RowNotFound { label: String },

    #[error("Index out of bounds: row {row}, col {col} (frame has {rows} rows, {cols} cols)")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Subset is not rectangular; masks and predicates select individual cells")]
    NotRectangular,

    #[error("Cannot build an index from zero columns")]
    EmptyIndex,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
