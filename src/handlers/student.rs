//! Student handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::model::StudentCandidate;
use crate::response::{created, ok};
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Unreadable or mistyped bodies are bad input; bodies cut off by the size limit are reported as such.
fn body_to_candidate(body: Result<Json<StudentCandidate>, JsonRejection>) -> Result<StudentCandidate, AppError> {
    let rejection = match body {
        Ok(Json(candidate)) => return Ok(candidate),
        Err(rejection) => rejection,
    };
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return Err(AppError::BodyTooLarge);
    }
    tracing::debug!(rejection = %rejection.body_text(), "unreadable request body");
    let reason = match rejection {
        JsonRejection::JsonSyntaxError(_) => "request body is not valid JSON",
        JsonRejection::JsonDataError(_) => "request body must be an object with string first and last",
        JsonRejection::MissingJsonContentType(_) => "expected a JSON request body",
        _ => "unreadable request body",
    };
    Err(AppError::BadInput(reason.into()))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list(state.store.as_ref()).await?;
    Ok(ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<StudentCandidate>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let candidate = body_to_candidate(body)?;
    let row = CrudService::create(state.store.as_ref(), &candidate).await?;
    Ok(created(row))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::read(state.store.as_ref(), &id).await?;
    Ok(ok(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StudentCandidate>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let candidate = body_to_candidate(body);
    if candidate.is_err() {
        // An unknown id is reported as such even when the body is unreadable.
        CrudService::read(state.store.as_ref(), &id).await?;
    }
    let row = CrudService::update(state.store.as_ref(), &id, &candidate?).await?;
    Ok(ok(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    CrudService::delete(state.store.as_ref(), &id).await?;
    Ok(StatusCode::OK)
}
