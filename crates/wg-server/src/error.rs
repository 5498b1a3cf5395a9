//! JSON error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use wg_core::WgError;

/// API error with status code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, code: "bad_request", message: msg.into() }
    }
    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::UNPROCESSABLE_ENTITY, code: "invalid_token", message: msg.into() }
    }
    pub fn invalid_setting(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, code: "invalid_setting", message: msg.into() }
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, code: "internal_error", message: msg.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<WgError> for ApiError {
    fn from(err: WgError) -> Self {
        match &err {
            WgError::InvalidToken(_) | WgError::UnsupportedVersion(_) | WgError::Base64(_) => {
                ApiError::invalid_token(err.to_string())
            }
            WgError::InvalidSetting { .. } | WgError::Serialization(_) => ApiError::invalid_setting(err.to_string()),
            WgError::UnknownWidget(_) => ApiError::bad_request(err.to_string()),
            _ => ApiError::internal(err.to_string()),
        }
    }
}
