//! Project row and request bodies.

use crate::service::validation::{FieldRules, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `projects`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub client: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub client: String,
}

impl Validate for CreateProjectRequest {
    const NAME: &'static str = "CreateProjectRequest";

    fn check(&self, rules: &mut FieldRules) {
        rules.required("Name", &self.name).required("Type", &self.kind);
    }
}
