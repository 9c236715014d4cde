use thiserror::Error;

/// Errors from spreadsheet addressing routines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
