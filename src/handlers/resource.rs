//! Generic create, list, patch and fetch handlers, instantiated once per resource.
//!
//! Each request runs `extract scope -> decode body -> validate -> invoke -> respond`.

use crate::error::AppError;
use crate::extractors::PathParams;
use crate::response::{created_id, no_content, success_many, success_one};
use crate::service::resource::{Fetch, Insert, Resource, Update};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequestParts, State},
    response::Response,
};
use serde::de::DeserializeOwned;

/// Unreadable bodies (including ones over the size limit) and invalid JSON are both a 400.
fn decode<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> Result<T, AppError> {
    let body = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "request body unreadable");
        AppError::BadRequest("Error reading request body".into())
    })?;
    serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "request body rejected");
        AppError::BadRequest("Error reading request body".into())
    })
}

pub async fn create<R>(
    State(state): State<AppState>,
    scope: R::Scope,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError>
where
    R: Insert,
    R::Scope: FromRequestParts<AppState>,
{
    let input: R::Input = decode(body)?;
    RequestValidator::validate(&input)?;
    let id = R::insert(&state.pool, &scope, input).await?;
    tracing::info!(resource = R::NAME, id, "created");
    created_id(id)
}

pub async fn list<R>(State(state): State<AppState>, scope: R::Scope) -> Result<Response, AppError>
where
    R: Resource,
    R::Scope: FromRequestParts<AppState>,
{
    let rows = R::list(&state.pool, &scope).await?;
    success_many(&rows)
}

pub async fn patch<R>(
    State(state): State<AppState>,
    scope: R::Scope,
    params: PathParams,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError>
where
    R: Update,
    R::Scope: FromRequestParts<AppState>,
{
    let id = params.id(R::ID_PARAM)?;
    let changes: R::Changes = decode(body)?;
    RequestValidator::validate(&changes)?;
    R::update(&state.pool, &scope, id, changes).await?;
    tracing::info!(resource = R::NAME, id, "updated");
    Ok(no_content())
}

pub async fn fetch<R>(State(state): State<AppState>, scope: R::Scope, params: PathParams) -> Result<Response, AppError>
where
    R: Fetch,
    R::Scope: FromRequestParts<AppState>,
{
    let id = params.id(R::ID_PARAM)?;
    let row = R::fetch(&state.pool, &scope, id).await?;
    success_one(&row)
}
