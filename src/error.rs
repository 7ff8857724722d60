//! Custom error types for fintrack
//!
//! Three layers: `ValidationError` for rejected user input, `PersistenceError`
//! for the ledger file, and `TrackerError` wrapping everything else.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Money, TransactionType};

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the ledger file
    #[error("I/O error: {0}")]
    Io(String),

    /// Rejected user input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Ledger file could not be read or written
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Export/import errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a persistence error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

/// Reasons a new entry is refused. Nothing is recorded when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} amount must be a positive number")]
    InvalidAmount { kind: TransactionType },

    #[error("{kind} description must not be empty")]
    EmptyDescription { kind: TransactionType },

    #[error("Expense of {amount} exceeds the current balance of {balance}")]
    Overdraft { amount: Money, balance: Money },

    #[error("{kind} would push the ledger total past the largest supported amount")]
    TotalOverflow { kind: TransactionType },
}

/// Failures reading or writing the ledger file
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ledger file {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("Failed to write {}: {reason}", path.display())]
    Unwritable { path: PathBuf, reason: String },
}

impl PersistenceError {
    /// Path of the file the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Unreadable { path, .. }
            | Self::Corrupt { path, .. }
            | Self::Unwritable { path, .. } => path,
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::InvalidAmount {
            kind: TransactionType::Income,
        };
        assert_eq!(err.to_string(), "Income amount must be a positive number");

        let err = ValidationError::EmptyDescription {
            kind: TransactionType::Expense,
        };
        assert_eq!(err.to_string(), "Expense description must not be empty");

        let err = ValidationError::Overdraft {
            amount: Money::from_units(40000),
            balance: Money::from_units(35000),
        };
        assert_eq!(
            err.to_string(),
            "Expense of 40,000 exceeds the current balance of 35,000"
        );

        let err = ValidationError::TotalOverflow {
            kind: TransactionType::Income,
        };
        assert_eq!(
            err.to_string(),
            "Income would push the ledger total past the largest supported amount"
        );
    }

    #[test]
    fn test_validation_wraps_transparently() {
        let err: TrackerError = ValidationError::InvalidAmount {
            kind: TransactionType::Expense,
        }
        .into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Expense amount must be a positive number");
    }

    #[test]
    fn test_persistence_error_path() {
        let err = PersistenceError::Corrupt {
            path: PathBuf::from("/tmp/transactions.json"),
            reason: "expected value".into(),
        };
        assert_eq!(err.path(), &PathBuf::from("/tmp/transactions.json"));
        assert!(err.to_string().contains("is corrupt"));

        let wrapped: TrackerError = err.into();
        assert!(wrapped.is_persistence());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
