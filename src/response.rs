//! Standard response helpers. Every body is JSON with an explicit charset.

use crate::error::AppError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Body returned by every create operation. The id is rendered as a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatedId {
    pub id: String,
}

fn json<T: Serialize + ?Sized>(status: StatusCode, data: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(data)
        .map_err(|_| AppError::Internal("Error marshaling the response".into()))?;
    Ok((status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
}

pub fn created_id(id: i64) -> Result<Response, AppError> {
    json(StatusCode::OK, &CreatedId { id: id.to_string() })
}

pub fn success_one<T: Serialize>(row: &T) -> Result<Response, AppError> {
    json(StatusCode::OK, row)
}

/// A list body; an empty slice renders as `[]`.
pub fn success_many<T: Serialize>(rows: &[T]) -> Result<Response, AppError> {
    json(StatusCode::OK, rows)
}

pub fn no_content() -> Response {
    (StatusCode::NO_CONTENT, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)]).into_response()
}
