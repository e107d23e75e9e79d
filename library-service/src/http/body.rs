use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Decodes a JSON request body.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if the body is not valid JSON for `T`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body)
        .map_err(|err| AppError::BadRequest(format!("Malformed request body: {err}")))
}

/// Percent-decodes a path segment.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if the decoded bytes are not UTF-8.
pub fn decode_segment(segment: &str) -> AppResult<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| AppError::BadRequest(format!("Malformed path segment `{segment}`")))
}

/// Returns the decoded value of the first `name` parameter of a query string.
///
/// `+` stands for a space.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if the decoded value is not UTF-8.
pub fn query_param(query: Option<&str>, name: &str) -> AppResult<Option<String>> {
    let Some(query) = query else {
        return Ok(None);
    };
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_segment(&key.replace('+', " "))? == name {
            return decode_segment(&value.replace('+', " ")).map(Some);
        }
    }
    Ok(None)
}
