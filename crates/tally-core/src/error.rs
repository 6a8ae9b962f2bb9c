//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No expenses provided")]
    NoExpenses,

    #[error("'expenses' is not iterable: {0}")]
    NotIterable(String),

    #[error("Total for {0} is not a finite number")]
    NonFiniteTotal(String),

    #[error("Change from {prev} to {curr} is not a finite percentage")]
    NonFiniteChange { prev: String, curr: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single expense record was left out of the summary.
///
/// These never abort an analysis; the normalizer logs them and moves on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("record is not an object")]
    NotAnObject,

    #[error("missing 'date'")]
    MissingDate,

    #[error("'date' is not a string")]
    DateNotString,

    #[error("unable to parse date '{value}': {reason}")]
    UnparsableDate { value: String, reason: String },

    #[error("missing 'amount'")]
    MissingAmount,

    #[error("'amount' is not a number")]
    InvalidAmount,
}
