//! Month-over-month spending insight

use crate::error::{Error, Result};
use crate::models::MonthlyTotal;

pub const NOT_ENOUGH_DATA_INSIGHT: &str = "Not enough data to generate insights.";
pub const FIRST_MONTH_INSIGHT: &str = "This is your first month of tracking expenses. Keep it up!";

/// Describe how the latest month compares to the one before it
///
/// `totals` must be ascending by month, as returned by
/// [`aggregate_by_month`](crate::aggregate::aggregate_by_month). A previous
/// total of zero counts as no change.
pub fn generate_insight(totals: &[MonthlyTotal]) -> Result<String> {
    let (prev, curr) = match totals {
        [] => return Ok(NOT_ENOUGH_DATA_INSIGHT.to_string()),
        [_] => return Ok(FIRST_MONTH_INSIGHT.to_string()),
        [.., prev, curr] => (prev, curr),
    };

    let change = percent_change(prev, curr)?;

    let trend = if change > 0.0 {
        "increased"
    } else if change < 0.0 {
        "decreased"
    } else {
        "remained the same"
    };

    Ok(format!(
        "Your expenses have {} by {:.2}% compared to last month.",
        trend,
        change.abs()
    ))
}

fn percent_change(prev: &MonthlyTotal, curr: &MonthlyTotal) -> Result<f64> {
    if prev.amount.is_zero() {
        return Ok(0.0);
    }

    let prev_amount = prev.amount.as_f64();
    let change = (curr.amount.as_f64() - prev_amount) / prev_amount * 100.0;

    if !change.is_finite() {
        return Err(Error::NonFiniteChange {
            prev: prev.month.clone(),
            curr: curr.month.clone(),
        });
    }
    Ok(change)
}
