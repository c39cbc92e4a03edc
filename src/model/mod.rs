//! Rows and request bodies for projects, sprints and issues.

pub mod issue;
pub mod patch;
pub mod project;
pub mod sprint;

pub use issue::{CreateIssueRequest, Issue, PatchIssueRequest};
pub use patch::Patch;
pub use project::{CreateProjectRequest, Project};
pub use sprint::{CreateSprintRequest, PatchSprintRequest, Sprint};
