//! Tally Core Library
//!
//! Monthly expense aggregation for the Tally service:
//! - Permissive date parsing for expense records
//! - Normalization that skips malformed records instead of failing
//! - Month bucketing and summation
//! - A one-sentence month-over-month spending insight

pub mod aggregate;
pub mod analyze;
pub mod dates;
pub mod error;
pub mod insight;
pub mod models;
pub mod normalize;
pub mod payload;

pub use aggregate::aggregate_by_month;
pub use analyze::{analyze_expenses, NO_EXPENSES_INSIGHT};
pub use dates::parse_expense_date;
pub use error::{Error, RecordError, Result};
pub use insight::generate_insight;
pub use models::{Amount, Analysis, MonthlyTotal, NormalizedExpense};
pub use normalize::{normalize_expenses, Normalized};
pub use payload::{expenses_from_document, expenses_from_payload, payload_from_body};
