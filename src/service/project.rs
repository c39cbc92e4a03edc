//! Projects: top-level, unique by name.

use crate::error::AppError;
use crate::model::{CreateProjectRequest, Project};
use crate::service::resource::{Insert, Resource};
use crate::store::{self, constraints, Violation};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, name, type, client, created_at, updated_at";

pub struct Projects;

#[async_trait]
impl Resource for Projects {
    const NAME: &'static str = "Project";
    const ID_PARAM: &'static str = "projectId";

    type Scope = ();
    type Row = Project;

    async fn list(pool: &PgPool, _scope: &()) -> Result<Vec<Project>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM projects WHERE deleted_at IS NULL ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Project>(&sql).fetch_all(pool).await?)
    }
}

#[async_trait]
impl Insert for Projects {
    type Input = CreateProjectRequest;

    async fn insert(pool: &PgPool, _scope: &(), input: CreateProjectRequest) -> Result<i64, AppError> {
        let sql = "INSERT INTO projects (name, type, client) VALUES ($1, $2, $3) RETURNING id";
        tracing::debug!(sql = %sql, name = %input.name, "query");
        sqlx::query_scalar::<_, i64>(sql)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.client)
            .fetch_one(pool)
            .await
            .map_err(|e| insert_error(e, &input))
    }
}

/// Whether a project with this id exists and is not soft-deleted.
pub(super) async fn is_live(pool: &PgPool, id: i64) -> Result<bool, AppError> {
    let sql = "SELECT EXISTS (SELECT 1 FROM projects WHERE id = $1 AND deleted_at IS NULL)";
    tracing::debug!(sql = %sql, id, "query");
    Ok(sqlx::query_scalar::<_, bool>(sql).bind(id).fetch_one(pool).await?)
}

fn insert_error(err: sqlx::Error, input: &CreateProjectRequest) -> AppError {
    let mapped = match store::violation(&err) {
        Some(Violation::Unique(constraints::PROJECTS_NAME)) => {
            Some(AppError::already_exists(Projects::NAME, "name", &input.name))
        }
        _ => None,
    };
    mapped.unwrap_or_else(|| AppError::Db(err))
}
