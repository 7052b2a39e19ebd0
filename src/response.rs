//! Assistant text extraction from chat-completion replies.

use crate::{Error, Result};
use serde_json::Value;

/// Read `choices[0].message.content` from a raw JSON body.
///
/// Any missing step of that path is a [`Error::MalformedResponse`] carrying
/// the received body.
pub fn extract(raw_json: &str) -> Result<String> {
    let json: Value = serde_json::from_str(raw_json)
        .map_err(|e| Error::malformed(format!("body is not valid JSON: {}", e), raw_json))?;

    let choices = json
        .get("choices")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::malformed("missing `choices` array", raw_json))?;
    let first = choices
        .first()
        .ok_or_else(|| Error::malformed("`choices` is empty", raw_json))?;
    let message = first
        .get("message")
        .ok_or_else(|| Error::malformed("missing `choices[0].message`", raw_json))?;

    message
        .get("content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::malformed("`choices[0].message.content` is not a string", raw_json))
}
