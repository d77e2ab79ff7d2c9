//! Error types for the ctower-core library.
//!
//! Field extraction itself never fails: a field that cannot be found is
//! left at its empty default. Errors only surface from configuration I/O
//! and from the downstream reconciliation checks.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ctower library.
#[derive(Error, Debug)]
pub enum CtowerError {
    /// Operation-level check failed.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by callers that check an extracted operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The text lacks the minimum section markers of an operation block.
    #[error("text does not look like an operation block")]
    InvalidText,

    /// Sum of requested disbursements differs from the declared purchase total.
    #[error("giros total {disbursed} differs from purchase total {declared}")]
    TotalMismatch { declared: Decimal, disbursed: Decimal },

    /// A summed amount does not fit the decimal range.
    #[error("{0} total overflows the decimal range")]
    AmountOverflow(&'static str),
}

/// Result type for the ctower library.
pub type Result<T> = std::result::Result<T, CtowerError>;
