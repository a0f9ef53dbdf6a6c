#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use chamados_api::config::ServerConfig;
use chamados_api::router::build_app_router;
use chamados_api::session::SessionStore;
use chamados_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        allow_data_reset: false,
        session_idle_secs: 3600,
    }
}

/// Build the full application router over `pool` with the given config.
pub fn build_app_with_config(pool: SqlitePool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        sessions: Arc::new(SessionStore::new(Duration::from_secs(
            config.session_idle_secs,
        ))),
    };
    build_app_router(state, &config)
}

/// Build the full application router, with the same middleware stack as
/// production.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_with_config(pool, test_config())
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    session: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(session) = session {
        builder = builder.header("x-session-id", session);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn get_with_session(app: Router, uri: &str, session: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(session), None).await
}

pub async fn put_json_with_session(
    app: Router,
    uri: &str,
    session: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(session), Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Tomorrow's date in `YYYY-MM-DD` form.
pub fn tomorrow() -> String {
    (chrono::Utc::now().date_naive() + chrono::Days::new(1)).to_string()
}

/// Yesterday's date in `YYYY-MM-DD` form.
pub fn yesterday() -> String {
    (chrono::Utc::now().date_naive() - chrono::Days::new(1)).to_string()
}

/// Register a project through the API and return its id.
pub async fn create_project(app: Router, name: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": name, "city": "Metropolis", "state": "NY"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// File a ticket through the API and return its id.
pub async fn create_ticket(app: Router, project_id: i64, title: &str) -> i64 {
    let response = post_json(
        app,
        "/api/v1/tickets",
        serde_json::json!({
            "project_id": project_id,
            "title": title,
            "requester": "alice@x.com",
            "description": "Water on the second floor",
            "desired_return_date": tomorrow(),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
