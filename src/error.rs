//! Typed errors and HTTP mapping.

use crate::response::JSON_CONTENT_TYPE;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("reading env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Every failure a request can end in. The display text is exactly the
/// `ErrorMessage` sent to the client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
    #[error("{}", db_message(.0))]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// `<Entity> with <field> "<value>" already exists`
    pub fn already_exists(entity: &str, field: &str, value: impl std::fmt::Display) -> Self {
        AppError::Conflict(format!("{} with {} \"{}\" already exists", entity, field, value))
    }

    /// `<Entity> with id "<id>" does not exists` (wording kept for client compatibility).
    pub fn missing(entity: &str, id: i64) -> Self {
        AppError::NotFound(format!("{} with id \"{}\" does not exists", entity, id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn db_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    #[serde(rename = "ErrorMessage")]
    pub error_message: String,
    #[serde(rename = "ErrorCode")]
    pub error_code: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error_message: self.to_string(),
            error_code: status.as_u16(),
        };
        if status.is_server_error() {
            tracing::error!(code = body.error_code, error = %body.error_message, "request failed");
        } else {
            tracing::warn!(code = body.error_code, error = %body.error_message, "request rejected");
        }
        let mut text = serde_json::to_string(&body).unwrap_or_default();
        text.push('\n');
        (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], text).into_response()
    }
}
