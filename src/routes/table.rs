//! The route table: every endpoint the service exposes, as a plain value.

use crate::handlers::{resource, status};
use crate::service::{Issues, Projects, Sprints};
use crate::state::AppState;
use axum::{
    handler::Handler,
    http::Method,
    routing::{self, MethodRouter},
};

/// One endpoint: a name for logs, a method, an axum path and the handler bound to it.
pub struct RouteSpec {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub handler: MethodRouter<AppState>,
}

impl RouteSpec {
    pub fn get<H, T>(name: &'static str, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        RouteSpec { name, method: Method::GET, path, handler: routing::get(handler) }
    }

    pub fn post<H, T>(name: &'static str, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        RouteSpec { name, method: Method::POST, path, handler: routing::post(handler) }
    }

    pub fn patch<H, T>(name: &'static str, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        RouteSpec { name, method: Method::PATCH, path, handler: routing::patch(handler) }
    }
}

const PROJECTS: &str = "/v1/projects";
const SPRINTS: &str = "/v1/projects/:projectId/sprints";
const SPRINT: &str = "/v1/projects/:projectId/sprints/:sprintId";
const ISSUES: &str = "/v1/projects/:projectId/sprints/:sprintId/issues";
const ISSUE: &str = "/v1/projects/:projectId/sprints/:sprintId/issues/:issueId";

#[derive(Default)]
pub struct RouteTable {
    pub routes: Vec<RouteSpec>,
}

impl RouteTable {
    /// Probes plus the versioned API.
    pub fn standard() -> Self {
        let mut table = RouteTable::status();
        table.routes.extend(RouteTable::api().routes);
        table
    }

    pub fn status() -> Self {
        RouteTable {
            routes: vec![
                RouteSpec::get("healthz", "/-/healthz", status::healthz),
                RouteSpec::get("ready", "/-/ready", status::ready),
            ],
        }
    }

    pub fn api() -> Self {
        RouteTable {
            routes: vec![
                RouteSpec::post("createProject", PROJECTS, resource::create::<Projects>),
                RouteSpec::get("listProjects", PROJECTS, resource::list::<Projects>),
                RouteSpec::post("createSprint", SPRINTS, resource::create::<Sprints>),
                RouteSpec::get("listSprints", SPRINTS, resource::list::<Sprints>),
                RouteSpec::patch("patchSprint", SPRINT, resource::patch::<Sprints>),
                RouteSpec::post("createIssue", ISSUES, resource::create::<Issues>),
                RouteSpec::get("listIssues", ISSUES, resource::list::<Issues>),
                RouteSpec::get("fetchIssue", ISSUE, resource::fetch::<Issues>),
                RouteSpec::patch("patchIssue", ISSUE, resource::patch::<Issues>),
            ],
        }
    }

    pub fn find(&self, name: &str) -> Option<&RouteSpec> {
        self.routes.iter().find(|r| r.name == name)
    }
}
