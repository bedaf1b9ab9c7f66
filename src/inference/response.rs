//! Classification of endpoint responses into summarization outcomes.

use reqwest::StatusCode;
use serde_json::{Map, Value};

use super::error::SummarizeError;
use super::types::NO_SUMMARY_PLACEHOLDER;

/// Turn an HTTP status and raw body into a summary or a classified error.
///
/// Status is checked before the body: 401 and 400 win regardless of what the
/// body contains.
pub fn classify_response(status: StatusCode, body: &str) -> Result<String, SummarizeError> {
    match status.as_u16() {
        401 => Err(SummarizeError::Unauthorized),
        400 => Err(SummarizeError::BadRequest(body.to_string())),
        code if !status.is_success() => Err(SummarizeError::RequestFailed {
            status: code,
            body: if body.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                body.to_string()
            },
        }),
        _ => {
            let value: Value = serde_json::from_str(body).map_err(|e| {
                SummarizeError::Unexpected(format!("Failed to parse response JSON: {}", e))
            })?;
            parse_body(value)
        }
    }
}

/// Extract the summary from a successful JSON body.
///
/// Unrecognized shapes carry the whole body, serialized back to JSON.
pub fn parse_body(value: Value) -> Result<String, SummarizeError> {
    let unexpected = || SummarizeError::UnexpectedFormat(value.to_string());

    match &value {
        Value::Array(items) => match items.first() {
            Some(Value::Object(first)) => Ok(summary_field(first)
                .ok_or_else(unexpected)?
                .unwrap_or_else(|| NO_SUMMARY_PLACEHOLDER.to_string())),
            _ => Err(unexpected()),
        },
        Value::Object(map) => {
            if let Some(summary) = summary_field(map).ok_or_else(unexpected)? {
                return Ok(summary);
            }
            match map.get("error") {
                Some(Value::String(message)) => Err(SummarizeError::Api(message.clone())),
                Some(other) => Err(SummarizeError::Api(other.to_string())),
                None => Err(unexpected()),
            }
        }
        _ => Err(unexpected()),
    }
}

/// `summary_text` of one object: `Some(None)` when absent, `None` when it is
/// not a string.
fn summary_field(map: &Map<String, Value>) -> Option<Option<String>> {
    match map.get("summary_text") {
        None => Some(None),
        Some(Value::String(text)) => Some(Some(text.clone())),
        Some(_) => None,
    }
}
