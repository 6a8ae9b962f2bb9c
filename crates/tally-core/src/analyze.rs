//! End-to-end expense analysis: normalize → aggregate → insight

use serde_json::Value;
use tracing::debug;

use crate::aggregate::aggregate_by_month;
use crate::error::Result;
use crate::insight::generate_insight;
use crate::models::Analysis;
use crate::normalize::normalize_expenses;

/// Insight returned when the request carried an empty expense list
pub const NO_EXPENSES_INSIGHT: &str = "No expenses found for the selected period.";

/// Analyze raw expense records
///
/// An empty input list short-circuits with [`NO_EXPENSES_INSIGHT`]. A
/// non-empty list whose records are all skipped still goes through the
/// insight generator and gets its "not enough data" message.
pub fn analyze_expenses(records: &[Value]) -> Result<Analysis> {
    if records.is_empty() {
        return Ok(Analysis {
            data: Vec::new(),
            insight: NO_EXPENSES_INSIGHT.to_string(),
        });
    }

    let normalized = normalize_expenses(records);
    debug!(
        received = records.len(),
        kept = normalized.expenses.len(),
        skipped = normalized.skipped,
        "Normalized expenses"
    );

    let data = aggregate_by_month(&normalized.expenses)?;
    let insight = generate_insight(&data)?;
    debug!(months = data.len(), "Aggregated monthly totals");

    Ok(Analysis { data, insight })
}
