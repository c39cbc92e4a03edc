//! Issue row and request bodies.

use crate::service::validation::{FieldRules, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `issues`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: i64,
    pub project_id: i64,
    pub sprint_id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub assignee: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateIssueRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub assignee: String,
}

impl Validate for CreateIssueRequest {
    const NAME: &'static str = "CreateIssueRequest";

    fn check(&self, _rules: &mut FieldRules) {}
}

/// Partial issue update. `sprintId` moves the issue to another sprint of the same project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatchIssueRequest {
    pub sprint_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub assignee: Option<String>,
}

impl Validate for PatchIssueRequest {
    const NAME: &'static str = "PatchIssueRequest";

    fn check(&self, rules: &mut FieldRules) {
        rules.required_if_present("Title", self.title.as_deref());
    }
}
