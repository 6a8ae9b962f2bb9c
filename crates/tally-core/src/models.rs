//! Data models for Tally

use std::fmt;
use std::ops::{Add, AddAssign};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A monetary amount as it arrived on the wire
///
/// Integer amounts stay integers so that `100 + 150` serializes as `250`
/// rather than `250.0`. Any float operand, or an integer overflow, turns the
/// result into a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Int(i64),
    Float(f64),
}

impl Amount {
    pub const ZERO: Amount = Amount::Int(0);

    /// Convert a JSON number, preferring the integer representation
    pub fn from_number(n: &serde_json::Number) -> Option<Self> {
        match n.as_i64() {
            Some(i) => Some(Amount::Int(i)),
            None => n.as_f64().map(Amount::Float),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Amount::Int(i) => i as f64,
            Amount::Float(f) => f,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.as_f64() == 0.0
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            Amount::Int(_) => true,
            Amount::Float(f) => f.is_finite(),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        match (self, rhs) {
            (Amount::Int(a), Amount::Int(b)) => match a.checked_add(b) {
                Some(sum) => Amount::Int(sum),
                None => Amount::Float(a as f64 + b as f64),
            },
            (a, b) => Amount::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Int(i) => write!(f, "{}", i),
            Amount::Float(v) => write!(f, "{:.2}", v),
        }
    }
}

/// An expense whose date has been parsed into a canonical value
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedExpense {
    /// Identifier from the record (`_id` or `id`), if any
    pub id: Option<String>,
    pub amount: Amount,
    pub date: NaiveDateTime,
}

impl NormalizedExpense {
    /// Month bucket key, `YYYY-MM`
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Summed spending for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// `YYYY-MM`, zero-padded
    pub month: String,
    pub amount: Amount,
}

/// Result of analyzing a batch of expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Monthly totals, ascending by month
    pub data: Vec<MonthlyTotal>,
    pub insight: String,
}
