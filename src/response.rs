//! Response helpers and the single mapping from `AppError` to HTTP.

use crate::error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub status: u16,
    pub code: String,
    pub message: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn error_body(status: StatusCode, code: &str, message: String) -> ErrorBody {
    ErrorBody {
        error: ErrorDetail {
            status: status.as_u16(),
            code: code.to_string(),
            message,
        },
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::BadInput(msg) => {
                tracing::debug!(reason = %msg, "rejected request");
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            AppError::NotFound(id) => {
                tracing::debug!(id = %id, "student not found");
                (StatusCode::NOT_FOUND, "not_found")
            }
            AppError::BodyTooLarge => {
                tracing::debug!("request body too large");
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large")
            }
            AppError::Storage { context, source } => {
                tracing::error!(error = %source, "storage error: {}", context);
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_error")
            }
        };
        // Storage messages are the operation context only; the driver error stays in the log.
        let body = error_body(status, code, self.to_string());
        (status, Json(body)).into_response()
    }
}
