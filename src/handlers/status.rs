//! Liveness and readiness probes.

use crate::response::JSON_CONTENT_TYPE;
use crate::state::AppState;
use crate::store;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusBody {
    pub status: String,
    pub name: String,
    pub version: String,
}

impl StatusBody {
    fn new(status: &str) -> Self {
        StatusBody {
            status: status.into(),
            name: env!("CARGO_PKG_NAME").into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

fn respond(status: StatusCode, body: StatusBody) -> Response {
    (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], Json(body)).into_response()
}

pub async fn healthz() -> Response {
    respond(StatusCode::OK, StatusBody::new("OK"))
}

pub async fn ready(State(state): State<AppState>) -> Response {
    match store::ping(&state.pool).await {
        Ok(()) => respond(StatusCode::OK, StatusBody::new("OK")),
        Err(e) => {
            tracing::warn!(error = %e, "database unreachable");
            respond(StatusCode::SERVICE_UNAVAILABLE, StatusBody::new("UNAVAILABLE"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn healthz_reports_package_identity() {
        let res = healthz().await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let body: StatusBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "OK");
        assert_eq!(body.name, "issue-service");
        assert_eq!(body.version, "1.0.0");
    }
}
