//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Money;

/// Direction of a file transfer, used to tag I/O failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoDirection {
    Export,
    Import,
}

impl fmt::Display for IoDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Export => write!(f, "export"),
            Self::Import => write!(f, "import"),
        }
    }
}

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Unparseable or negative amount, invalid date
    #[error("Parse error: {0}")]
    Parse(String),

    /// 1-based position outside the current record count
    #[error("No expense at position {index} (ledger has {len})")]
    Index { index: usize, len: usize },

    /// Malformed import row
    #[error("Format error: {0}")]
    Format(String),

    /// Date range with start after end
    #[error("Invalid date range: {start} is after {end}")]
    Range { start: NaiveDate, end: NaiveDate },

    /// File failure during export or import
    #[error("Failed to {direction} expenses: {message}")]
    Io {
        direction: IoDirection,
        message: String,
    },

    /// Monthly budget was already set this session
    #[error("Monthly budget is already set to {0}; reset it first")]
    BudgetAlreadySet(Money),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Audit log errors
    #[error("Audit log error: {0}")]
    Audit(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Console read/write failures in the interactive menu
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl LedgerError {
    /// Create an I/O error for a failed export
    pub fn export(message: impl Into<String>) -> Self {
        Self::Io {
            direction: IoDirection::Export,
            message: message.into(),
        }
    }

    /// Create an I/O error for a failed import
    pub fn import(message: impl Into<String>) -> Self {
        Self::Io {
            direction: IoDirection::Import,
            message: message.into(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }
}

// Only console I/O converts implicitly; file transfers tag their direction.
impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_index_error() {
        let err = LedgerError::Index { index: 5, len: 3 };
        assert_eq!(err.to_string(), "No expense at position 5 (ledger has 3)");
        assert!(err.is_index());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_io_direction() {
        let err = LedgerError::export("disk full");
        assert_eq!(err.to_string(), "Failed to export expenses: disk full");

        let err = LedgerError::import("not found");
        assert!(matches!(
            err,
            LedgerError::Io {
                direction: IoDirection::Import,
                ..
            }
        ));
    }

    #[test]
    fn test_range_error() {
        let err = LedgerError::Range {
            start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: 2024-02-01 is after 2024-01-01"
        );
        assert!(err.is_range());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Terminal(_)));
    }

    #[test]
    fn test_budget_already_set() {
        let err = LedgerError::BudgetAlreadySet(Money::from_cents(10000));
        assert_eq!(
            err.to_string(),
            "Monthly budget is already set to 100.00; reset it first"
        );
    }
}
