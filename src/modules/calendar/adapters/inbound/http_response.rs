// JSON envelope shared by every calendar HTTP handler.
//
// Success bodies are `{"result": ...}`, failures `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::modules::calendar::core::errors::CalendarError;

const INTERNAL_ERROR_MESSAGE: &str = "internal server error";
const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
struct ResultBody<T> {
    result: T,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

pub fn ok<T: Serialize>(result: T) -> Response {
    (StatusCode::OK, Json(ResultBody { result })).into_response()
}

pub fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

/// Failures detected by the transport layer before the use case is called.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("unsupported media type")]
    UnsupportedMediaType,

    #[error("invalid JSON format")]
    InvalidJson,

    #[error("missing required parameters")]
    MissingParameters,
}

impl From<JsonRejection> for RequestError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => RequestError::UnsupportedMediaType,
            _ => RequestError::InvalidJson,
        }
    }
}

impl From<QueryRejection> for RequestError {
    fn from(_: QueryRejection) -> Self {
        RequestError::MissingParameters
    }
}

/// Mutating routes take `application/json` only. Parameters such as
/// `charset` are ignored; `+json` suffix types are refused.
pub fn require_json(headers: &HeaderMap) -> Result<(), RequestError> {
    let essence = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim);

    match essence {
        Some(essence) if essence.eq_ignore_ascii_case(JSON_MEDIA_TYPE) => Ok(()),
        other => {
            tracing::warn!(content_type = ?other, "unsupported media type");
            Err(RequestError::UnsupportedMediaType)
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejected request");
        error(StatusCode::BAD_REQUEST, &self.to_string())
    }
}

pub fn status_for(err: &CalendarError) -> StatusCode {
    match err {
        CalendarError::NotFound => StatusCode::SERVICE_UNAVAILABLE,
        CalendarError::Conflict => StatusCode::CONFLICT,
        e if e.is_validation() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for CalendarError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            return error(status, INTERNAL_ERROR_MESSAGE);
        }
        error(status, &self.to_string())
    }
}
