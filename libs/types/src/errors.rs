//! Error types for the expense tracker model
//!
//! The model has a single failure kind, invalid argument, raised
//! synchronously and without side effects. The reasons are kept apart so
//! callers can tell what was wrong with their input.

use thiserror::Error;

/// Result alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Top-level model error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

impl ModelError {
    /// Whether this is an invalid-argument failure (always, today)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ModelError::InvalidArgument(_))
    }

    /// The reason behind the rejection
    pub fn reason(&self) -> &InvalidArgument {
        match self {
            ModelError::InvalidArgument(reason) => reason,
        }
    }
}

/// Why an argument was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("transaction must be present")]
    MissingTransaction,

    #[error("matched filter indices must be present")]
    MissingIndices,

    #[error("matched filter index {index} out of range for {len} transactions")]
    IndexOutOfRange { index: i64, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_transaction_display() {
        let err: ModelError = InvalidArgument::MissingTransaction.into();
        assert_eq!(
            err.to_string(),
            "invalid argument: transaction must be present"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err: ModelError = InvalidArgument::IndexOutOfRange { index: -1, len: 2 }.into();
        assert!(err.to_string().contains("-1"));
        assert!(err.to_string().contains("2 transactions"));
    }

    #[test]
    fn test_model_error_from_invalid_argument() {
        let err: ModelError = InvalidArgument::MissingIndices.into();
        assert!(err.is_invalid_argument());
        assert_eq!(err.reason(), &InvalidArgument::MissingIndices);
    }
}
