//! Expense normalization
//!
//! Turns raw JSON expense records into [`NormalizedExpense`] values ordered by
//! date. Records that cannot be normalized are logged and skipped.

use serde_json::Value;
use tracing::warn;

use crate::dates::parse_expense_date;
use crate::error::RecordError;
use crate::models::{Amount, NormalizedExpense};

/// Keys checked, in order, for a record identifier used in log messages
const ID_KEYS: [&str; 2] = ["_id", "id"];

/// Output of [`normalize_expenses`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    /// Kept expenses, ascending by date
    pub expenses: Vec<NormalizedExpense>,
    /// Number of records dropped
    pub skipped: usize,
}

/// Normalize a batch of raw records, dropping the ones that don't conform
///
/// The sort is stable, so expenses with equal dates keep their input order.
pub fn normalize_expenses(records: &[Value]) -> Normalized {
    let mut expenses = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for record in records {
        match normalize_expense(record) {
            Ok(expense) => expenses.push(expense),
            Err(e) => {
                let id = record_id(record);
                warn!(
                    expense_id = id.as_deref().unwrap_or("unknown"),
                    error = %e,
                    "Skipping expense"
                );
                skipped += 1;
            }
        }
    }

    expenses.sort_by_key(|e| e.date);

    Normalized { expenses, skipped }
}

/// Normalize a single raw record
pub fn normalize_expense(record: &Value) -> Result<NormalizedExpense, RecordError> {
    let obj = record.as_object().ok_or(RecordError::NotAnObject)?;

    let date = match obj.get("date") {
        None | Some(Value::Null) => return Err(RecordError::MissingDate),
        Some(Value::String(s)) => parse_expense_date(s)?,
        Some(_) => return Err(RecordError::DateNotString),
    };

    let amount = match obj.get("amount") {
        None | Some(Value::Null) => return Err(RecordError::MissingAmount),
        Some(Value::Number(n)) => Amount::from_number(n).ok_or(RecordError::InvalidAmount)?,
        Some(_) => return Err(RecordError::InvalidAmount),
    };

    Ok(NormalizedExpense {
        id: record_id(record),
        amount,
        date,
    })
}

fn record_id(record: &Value) -> Option<String> {
    ID_KEYS
        .iter()
        .filter_map(|key| record.get(*key))
        .find_map(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}
