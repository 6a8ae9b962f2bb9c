//! Extraction of the expense list from request payloads and files

use std::borrow::Cow;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Key holding the expense list in a request payload
pub const EXPENSES_KEY: &str = "expenses";

/// Pull the expense records out of a `{"expenses": [...]}` payload
///
/// Only a missing key is [`Error::NoExpenses`]. A present value is read the
/// way a dynamically typed client would iterate it:
/// - an array yields its elements
/// - an empty or falsy value (`null`, `false`, `0`, `""`, `{}`) yields nothing
/// - a non-empty string yields one string per character and an object yields
///   its keys; none of these are expense objects, so all are skipped later
/// - `true` or a non-zero number cannot be iterated: [`Error::NotIterable`]
pub fn expenses_from_payload(payload: &Value) -> Result<Cow<'_, [Value]>> {
    let expenses = payload.get(EXPENSES_KEY).ok_or(Error::NoExpenses)?;

    match expenses {
        Value::Array(records) => Ok(Cow::Borrowed(records.as_slice())),
        Value::Null | Value::Bool(false) => Ok(Cow::Borrowed(&[])),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(Cow::Borrowed(&[])),
        Value::String(s) => Ok(Cow::Owned(
            s.chars().map(|c| Value::String(c.to_string())).collect(),
        )),
        Value::Object(map) => Ok(Cow::Owned(
            map.keys().map(|k| Value::String(k.clone())).collect(),
        )),
        other => Err(Error::NotIterable(other.to_string())),
    }
}

/// Parse an HTTP request body into a payload value
///
/// An empty body, invalid JSON, or anything other than a JSON object counts as
/// no expenses having been provided.
pub fn payload_from_body(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::NoExpenses);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(_) => Err(Error::NoExpenses),
        Err(e) => {
            debug!(error = %e, "Request body is not valid JSON");
            Err(Error::NoExpenses)
        }
    }
}

/// Read expense records from a JSON document
///
/// Accepts either the request payload shape or a bare array of records.
pub fn expenses_from_document(text: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(records) => Ok(records),
        other => expenses_from_payload(&other).map(Cow::into_owned),
    }
}
