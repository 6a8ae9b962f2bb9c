//! Expense analysis handler

use axum::{body::Bytes, Json};
use tracing::debug;

use crate::AppError;
use tally_core::{analyze_expenses, expenses_from_payload, payload_from_body, Analysis};

/// POST /analyze - Summarize expenses by month
///
/// The body is parsed by hand rather than with the `Json` extractor so that a
/// missing or malformed body gets the same 400 response as a missing
/// `expenses` key.
pub async fn analyze(body: Bytes) -> Result<Json<Analysis>, AppError> {
    let payload = payload_from_body(&body).map_err(AppError::from_core)?;
    let records = expenses_from_payload(&payload).map_err(AppError::from_core)?;

    debug!(count = records.len(), "Analyzing expenses");

    let analysis = analyze_expenses(&records).map_err(AppError::from_core)?;

    Ok(Json(analysis))
}
