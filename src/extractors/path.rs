//! Extract integer ids and resource scopes from matched path parameters.

use crate::error::AppError;
use crate::service::resource::{ProjectScope, Resource, SprintScope};
use crate::service::{Projects, Sprints};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::collections::HashMap;

/// Raw path parameters of the matched route.
#[derive(Clone, Debug, Default)]
pub struct PathParams(pub HashMap<String, String>);

impl PathParams {
    /// Integer value of a named parameter. Both failure cases are server errors:
    /// the router only matches routes that declare the parameters their handler reads.
    pub fn id(&self, name: &str) -> Result<i64, AppError> {
        let raw = self
            .0
            .get(name)
            .ok_or_else(|| AppError::Internal(format!("Error reading {} path param from request", name)))?;
        raw.parse::<i64>()
            .map_err(|_| AppError::Internal(format!("Error parsing {} to int", name)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PathParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<HashMap<String, String>>::from_request_parts(parts, state).await {
            Ok(Path(params)) => Ok(PathParams(params)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "path params unavailable");
                Ok(PathParams::default())
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ProjectScope
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = PathParams::from_request_parts(parts, state).await?;
        Ok(ProjectScope {
            project_id: params.id(Projects::ID_PARAM)?,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SprintScope
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = PathParams::from_request_parts(parts, state).await?;
        Ok(SprintScope {
            project_id: params.id(Projects::ID_PARAM)?,
            sprint_id: params.id(Sprints::ID_PARAM)?,
        })
    }
}
