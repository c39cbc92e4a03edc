//! Sprints: nested under a project, number unique per project.

use crate::error::AppError;
use crate::model::{CreateSprintRequest, PatchSprintRequest, Sprint};
use crate::service::resource::{Insert, ProjectScope, Resource, Update};
use crate::service::Projects;
use crate::sql::UpdateQuery;
use crate::store::{self, constraints, Violation};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str =
    "id, project_id, number, start_date, end_date, completed, max_issue_per_sprint, created_at, updated_at";

pub struct Sprints;

#[async_trait]
impl Resource for Sprints {
    const NAME: &'static str = "Sprint";
    const ID_PARAM: &'static str = "sprintId";

    type Scope = ProjectScope;
    type Row = Sprint;

    async fn list(pool: &PgPool, scope: &ProjectScope) -> Result<Vec<Sprint>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM sprints WHERE project_id = $1 AND deleted_at IS NULL ORDER BY id"
        );
        tracing::debug!(sql = %sql, project_id = scope.project_id, "query");
        Ok(sqlx::query_as::<_, Sprint>(&sql)
            .bind(scope.project_id)
            .fetch_all(pool)
            .await?)
    }
}

#[async_trait]
impl Insert for Sprints {
    type Input = CreateSprintRequest;

    async fn insert(pool: &PgPool, scope: &ProjectScope, input: CreateSprintRequest) -> Result<i64, AppError> {
        let sql = "INSERT INTO sprints (project_id, number, start_date, end_date, completed, max_issue_per_sprint) \
                   SELECT $1, $2, $3, $4, FALSE, $5 \
                   WHERE EXISTS (SELECT 1 FROM projects WHERE id = $1 AND deleted_at IS NULL) \
                   RETURNING id";
        tracing::debug!(sql = %sql, project_id = scope.project_id, "query");
        sqlx::query_scalar::<_, i64>(sql)
            .bind(scope.project_id)
            .bind(&input.number)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.max_issue_per_sprint)
            .fetch_optional(pool)
            .await
            .map_err(|e| write_error(e, scope, Some(input.number.as_str())))?
            .ok_or_else(|| AppError::missing(Projects::NAME, scope.project_id))
    }
}

#[async_trait]
impl Update for Sprints {
    type Changes = PatchSprintRequest;

    async fn update(
        pool: &PgPool,
        scope: &ProjectScope,
        id: i64,
        changes: PatchSprintRequest,
    ) -> Result<(), AppError> {
        let number = changes.number.clone();
        let mut q = UpdateQuery::new("sprints");
        q.set_opt("number", changes.number)
            .set_patch("start_date", changes.start_date)
            .set_patch("end_date", changes.end_date)
            .set_opt("completed", changes.completed)
            .set_patch("max_issue_per_sprint", changes.max_issue_per_sprint)
            .filter("id", id)
            .filter("project_id", scope.project_id)
            .live();
        match q.execute(pool).await {
            Ok(0) => Err(AppError::missing(Sprints::NAME, id)),
            Ok(_) => Ok(()),
            Err(e) => Err(write_error(e, scope, number.as_deref())),
        }
    }
}

fn write_error(err: sqlx::Error, scope: &ProjectScope, number: Option<&str>) -> AppError {
    let mapped = match store::violation(&err) {
        Some(Violation::Unique(constraints::SPRINTS_NUMBER_PROJECT)) => Some(AppError::already_exists(
            Sprints::NAME,
            "number",
            number.unwrap_or_default(),
        )),
        Some(Violation::ForeignKey(constraints::SPRINTS_PROJECT)) => {
            Some(AppError::missing(Projects::NAME, scope.project_id))
        }
        _ => None,
    };
    mapped.unwrap_or_else(|| AppError::Db(err))
}
