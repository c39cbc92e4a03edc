//! Resource traits: the per-entity persistence hooks the generic handlers call.

use crate::error::AppError;
use crate::service::validation::Validate;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::PgPool;

/// Path scope for resources nested under a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectScope {
    pub project_id: i64,
}

/// Path scope for resources nested under a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprintScope {
    pub project_id: i64,
    pub sprint_id: i64,
}

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Entity name used in client-facing messages.
    const NAME: &'static str;
    /// Path parameter that names a single row.
    const ID_PARAM: &'static str;

    type Scope: Send + Sync + 'static;
    type Row: Serialize + Send + Sync;

    /// All live rows in scope, ordered by id.
    async fn list(pool: &PgPool, scope: &Self::Scope) -> Result<Vec<Self::Row>, AppError>;
}

#[async_trait]
pub trait Insert: Resource {
    type Input: DeserializeOwned + Validate + Send + Sync;

    /// Insert one row and return its id.
    async fn insert(pool: &PgPool, scope: &Self::Scope, input: Self::Input) -> Result<i64, AppError>;
}

#[async_trait]
pub trait Update: Resource {
    type Changes: DeserializeOwned + Validate + Send + Sync;

    /// Apply the supplied changes to one row. A missing row is `NotFound`.
    async fn update(
        pool: &PgPool,
        scope: &Self::Scope,
        id: i64,
        changes: Self::Changes,
    ) -> Result<(), AppError>;
}

#[async_trait]
pub trait Fetch: Resource {
    async fn fetch(pool: &PgPool, scope: &Self::Scope, id: i64) -> Result<Self::Row, AppError>;
}
