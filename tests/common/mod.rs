#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use issue_service::{build_router, AppState, RouteTable};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub fn app(pool: PgPool) -> Router {
    build_router(RouteTable::standard(), AppState::new(pool))
}

pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!("body is not JSON ({}): {:?}", e, String::from_utf8_lossy(&self.body))
        })
    }

    /// `ErrorMessage` of an error envelope.
    pub fn message(&self) -> String {
        self.json()["ErrorMessage"].as_str().unwrap_or_default().to_string()
    }
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: impl Into<Body>) -> Reply {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = res.into_body().collect().await.unwrap().to_bytes().to_vec();
    Reply { status, content_type, body }
}

pub async fn get(app: &Router, uri: &str) -> Reply {
    send_raw(app, Method::GET, uri, Body::empty()).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> Reply {
    send_raw(app, Method::POST, uri, body.to_string()).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> Reply {
    send_raw(app, Method::PATCH, uri, body.to_string()).await
}

/// POST and return the created id string; panics unless the create succeeded.
pub async fn create(app: &Router, uri: &str, body: Value) -> String {
    let reply = post(app, uri, body).await;
    assert_eq!(reply.status, StatusCode::OK, "create failed: {:?}", reply.json());
    reply.json()["id"].as_str().expect("id is a string").to_string()
}

pub async fn create_project(app: &Router, name: &str) -> String {
    create(app, "/v1/projects", serde_json::json!({"name": name, "type": "internal"})).await
}

pub async fn create_sprint(app: &Router, project_id: &str, number: &str) -> String {
    create(
        app,
        &format!("/v1/projects/{}/sprints", project_id),
        serde_json::json!({"number": number}),
    )
    .await
}

pub async fn create_issue(app: &Router, project_id: &str, sprint_id: &str, title: &str) -> String {
    create(
        app,
        &format!("/v1/projects/{}/sprints/{}/issues", project_id, sprint_id),
        serde_json::json!({"type": "task", "title": title, "status": "open"}),
    )
    .await
}
