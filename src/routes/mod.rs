//! Router assembly from an explicit route table.

mod table;

pub use table::{RouteSpec, RouteTable};

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{Method, Request, Uri},
    routing::MethodRouter,
    Router,
};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Bodies above this size fail to read and are answered with a 400.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {} not found", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("Method {} not allowed on {}", method, uri.path()))
}

/// Mount every route of `table`. Each route gets its own trace span carrying the route name.
/// Routes sharing a path are merged so unmatched methods get one error envelope per path.
pub fn build_router(table: RouteTable, state: AppState) -> Router {
    let mut paths: Vec<(&'static str, MethodRouter<AppState>)> = Vec::new();
    for spec in table.routes {
        let name = spec.name;
        let trace = TraceLayer::new_for_http()
            .make_span_with(move |req: &Request<Body>| {
                tracing::info_span!("request", route = name, method = %req.method(), uri = %req.uri())
            })
            .on_response(DefaultOnResponse::new().level(Level::INFO));
        tracing::debug!(route = name, method = %spec.method, path = spec.path, "mounting route");
        let handler = spec.handler.layer(trace);
        match paths.iter_mut().find(|(path, _)| *path == spec.path) {
            Some((_, existing)) => {
                let merged = std::mem::replace(existing, MethodRouter::new()).merge(handler);
                *existing = merged;
            }
            None => paths.push((spec.path, handler)),
        }
    }

    let mut router = Router::new();
    for (path, handlers) in paths {
        router = router.route(path, handlers.fallback(method_not_allowed));
    }
    router
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
