//! Custom error types for Moonlight Ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// Message shown when a submission carries a non-positive amount
pub const NON_POSITIVE_AMOUNT_MESSAGE: &str = "金额必须大于零！";

/// Message shown when a record would push the session total past `i64` cents
pub const TOTAL_OVERFLOW_MESSAGE: &str = "金额过大，总支出超出可记录范围！";

/// The main error type for Moonlight Ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A submitted record was rejected; the ledger is unchanged
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Errors reading a previously exported CSV
    #[error("Import error on line {line}: {message}")]
    Import { line: u64, message: String },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl LedgerError {
    /// Create the validation error for an amount that is zero or negative
    pub fn non_positive_amount(amount: Money) -> Self {
        Self::Validation(format!("{} ({})", NON_POSITIVE_AMOUNT_MESSAGE, amount))
    }

    /// Create the validation error for a record the running total cannot absorb
    pub fn total_overflow(amount: Money) -> Self {
        Self::Validation(format!("{} ({})", TOTAL_OVERFLOW_MESSAGE, amount))
    }

    /// Create an import error for a given CSV line
    pub fn import(line: u64, message: impl Into<String>) -> Self {
        Self::Import {
            line,
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Short message for inline display, without the offending amount
    pub fn form_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg
                .split_once(" (")
                .map_or(msg.as_str(), |(head, _)| head)
                .to_string(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Moonlight Ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
