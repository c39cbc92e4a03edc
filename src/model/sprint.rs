//! Sprint row and request bodies.

use crate::model::Patch;
use crate::service::validation::{FieldRules, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `sprints`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub id: i64,
    pub project_id: i64,
    pub number: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub max_issue_per_sprint: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New sprints always start with `completed = false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateSprintRequest {
    pub number: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub max_issue_per_sprint: Option<i32>,
}

impl Validate for CreateSprintRequest {
    const NAME: &'static str = "CreateSprintRequest";

    fn check(&self, rules: &mut FieldRules) {
        rules.required("Number", &self.number);
    }
}

/// Partial sprint update. Dates and the issue cap can be cleared with `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatchSprintRequest {
    pub number: Option<String>,
    pub start_date: Patch<DateTime<Utc>>,
    pub end_date: Patch<DateTime<Utc>>,
    pub completed: Option<bool>,
    pub max_issue_per_sprint: Patch<i32>,
}

impl Validate for PatchSprintRequest {
    const NAME: &'static str = "PatchSprintRequest";

    fn check(&self, rules: &mut FieldRules) {
        rules.required_if_present("Number", self.number.as_deref());
    }
}
