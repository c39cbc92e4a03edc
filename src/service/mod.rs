//! Per-resource persistence behind the generic handlers.

mod issue;
mod project;
pub mod resource;
mod sprint;
pub mod validation;

pub use issue::Issues;
pub use project::Projects;
pub use resource::{Fetch, Insert, ProjectScope, Resource, SprintScope, Update};
pub use sprint::Sprints;
pub use validation::RequestValidator;
