use thiserror::Error;

/// Errors raised while building or rendering sparklines
#[derive(Error, Debug)]
pub enum SparklineError {
    #[error("Sparkline needs at least one value")]
    Empty,

    #[error("Sparkline value at position {index} is not finite")]
    NonFinite { index: usize },

    /// Combined sparklines must share one canvas size.
    #[error("Sparklines must have the same size: {left:?} vs {right:?}")]
    SizeMismatch { left: (u32, u32), right: (u32, u32) },

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, SparklineError>;
