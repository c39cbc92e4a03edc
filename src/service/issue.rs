//! Issues: nested under a project and a sprint.

use crate::error::AppError;
use crate::model::{CreateIssueRequest, Issue, PatchIssueRequest};
use crate::service::resource::{Fetch, Insert, Resource, SprintScope, Update};
use crate::service::{project, Projects, Sprints};
use crate::sql::UpdateQuery;
use crate::store::{self, constraints, Violation};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str =
    "id, project_id, sprint_id, type, title, description, status, assignee, created_at, updated_at";

pub struct Issues;

#[async_trait]
impl Resource for Issues {
    const NAME: &'static str = "Issue";
    const ID_PARAM: &'static str = "issueId";

    type Scope = SprintScope;
    type Row = Issue;

    async fn list(pool: &PgPool, scope: &SprintScope) -> Result<Vec<Issue>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM issues \
             WHERE project_id = $1 AND sprint_id = $2 AND deleted_at IS NULL ORDER BY id"
        );
        tracing::debug!(sql = %sql, project_id = scope.project_id, sprint_id = scope.sprint_id, "query");
        Ok(sqlx::query_as::<_, Issue>(&sql)
            .bind(scope.project_id)
            .bind(scope.sprint_id)
            .fetch_all(pool)
            .await?)
    }
}

#[async_trait]
impl Fetch for Issues {
    async fn fetch(pool: &PgPool, scope: &SprintScope, id: i64) -> Result<Issue, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM issues \
             WHERE id = $1 AND project_id = $2 AND sprint_id = $3 AND deleted_at IS NULL"
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Issue>(&sql)
            .bind(id)
            .bind(scope.project_id)
            .bind(scope.sprint_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::missing(Issues::NAME, id))
    }
}

#[async_trait]
impl Insert for Issues {
    type Input = CreateIssueRequest;

    async fn insert(pool: &PgPool, scope: &SprintScope, input: CreateIssueRequest) -> Result<i64, AppError> {
        let sql = "INSERT INTO issues (project_id, sprint_id, type, title, description, status, assignee) \
                   SELECT $1, $2, $3, $4, $5, $6, $7 \
                   WHERE EXISTS ( \
                       SELECT 1 FROM sprints s JOIN projects p ON p.id = s.project_id \
                       WHERE s.id = $2 AND s.project_id = $1 \
                       AND s.deleted_at IS NULL AND p.deleted_at IS NULL) \
                   RETURNING id";
        tracing::debug!(sql = %sql, project_id = scope.project_id, sprint_id = scope.sprint_id, "query");
        let id = sqlx::query_scalar::<_, i64>(sql)
            .bind(scope.project_id)
            .bind(scope.sprint_id)
            .bind(&input.kind)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.assignee)
            .fetch_optional(pool)
            .await
            .map_err(|e| write_error(e, scope.project_id, scope.sprint_id))?;
        match id {
            Some(id) => Ok(id),
            None => Err(missing_parent(pool, scope).await?),
        }
    }
}

#[async_trait]
impl Update for Issues {
    type Changes = PatchIssueRequest;

    async fn update(
        pool: &PgPool,
        scope: &SprintScope,
        id: i64,
        changes: PatchIssueRequest,
    ) -> Result<(), AppError> {
        let target_sprint = changes.sprint_id.unwrap_or(scope.sprint_id);
        let mut q = UpdateQuery::new("issues");
        q.set_opt("sprint_id", changes.sprint_id)
            .set_opt("type", changes.kind)
            .set_opt("title", changes.title)
            .set_opt("description", changes.description)
            .set_opt("status", changes.status)
            .set_opt("assignee", changes.assignee)
            .filter("id", id)
            .filter("project_id", scope.project_id)
            .filter("sprint_id", scope.sprint_id)
            .live();
        match q.execute(pool).await {
            Ok(0) => Err(AppError::missing(Issues::NAME, id)),
            Ok(_) => Ok(()),
            Err(e) => Err(write_error(e, scope.project_id, target_sprint)),
        }
    }
}

/// No live sprint of a live project matched the scope; report the outermost missing parent.
async fn missing_parent(pool: &PgPool, scope: &SprintScope) -> Result<AppError, AppError> {
    if project::is_live(pool, scope.project_id).await? {
        Ok(AppError::missing(Sprints::NAME, scope.sprint_id))
    } else {
        Ok(AppError::missing(Projects::NAME, scope.project_id))
    }
}

/// The violated foreign key decides which parent is reported missing.
fn write_error(err: sqlx::Error, project_id: i64, sprint_id: i64) -> AppError {
    let mapped = match store::violation(&err) {
        Some(Violation::ForeignKey(constraints::ISSUES_PROJECT)) => {
            Some(AppError::missing(Projects::NAME, project_id))
        }
        Some(Violation::ForeignKey(constraints::ISSUES_SPRINT)) => {
            Some(AppError::missing(Sprints::NAME, sprint_id))
        }
        _ => None,
    };
    mapped.unwrap_or_else(|| AppError::Db(err))
}
