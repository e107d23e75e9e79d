use bytes::Bytes;
use http::{
    HeaderValue, Response, StatusCode,
    header::{ALLOW, CONTENT_TYPE},
};
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

use crate::error::{AppError, AppResult};

pub type HttpResponse = Response<Full<Bytes>>;

const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

pub fn empty(status: StatusCode) -> HttpResponse {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = status;
    response
}

pub fn text<T: Into<String>>(status: StatusCode, body: T) -> HttpResponse {
    let mut response = Response::new(Full::new(Bytes::from(body.into())));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_CONTENT_TYPE));
    response
}

/// Serializes `value` as the response body.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> AppResult<HttpResponse> {
    let mut response = Response::new(Full::new(Bytes::from(serde_json::to_vec(value)?)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    Ok(response)
}

/// Lists respond with no content when empty.
///
/// # Errors
///
/// Returns an error if the items cannot be serialized.
pub fn json_list<T: Serialize>(items: &[T]) -> AppResult<HttpResponse> {
    if items.is_empty() {
        return Ok(empty(StatusCode::NO_CONTENT));
    }
    json(StatusCode::OK, items)
}

pub fn method_not_allowed(allowed: &'static str) -> HttpResponse {
    let mut response = empty(StatusCode::METHOD_NOT_ALLOWED);
    response
        .headers_mut()
        .insert(ALLOW, HeaderValue::from_static(allowed));
    response
}

/// Renders an error with its display message as the body.
///
/// Internal errors are logged and answered with a generic message.
pub fn from_error(err: &AppError) -> HttpResponse {
    let status = err.status_code();
    if let AppError::Internal(_) = err {
        error!(error = %err, "Request failed");
        return text(status, "Internal server error");
    }
    text(status, err.to_string())
}
