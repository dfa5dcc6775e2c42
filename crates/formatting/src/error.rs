use thiserror::Error;

/// Errors raised while configuring or applying a cell formatter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// A numeric formatter was handed a value that is not a number.
    #[error("Numeric type required, got {type_name} '{value}'")]
    NonNumeric { type_name: String, value: String },

    #[error("Precision must be a non-negative integer, got {0}")]
    InvalidPrecision(String),

    #[error("Location must be either 'prefix' or 'suffix', got '{0}'")]
    InvalidLocation(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
