//! HTTP-level tests for project registration.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "name": "Site A",
            "address": "Rua 1",
            "city": "Metropolis",
            "state": "NY"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Site A");
    assert_eq!(json["address"], "Rua 1");
    assert_eq!(json["city"], "Metropolis");
    assert_eq!(json["state"], "NY");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_registered_project_appears_in_list(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let before = body_json(get(app, "/api/v1/projects").await).await;
    assert_eq!(before.as_array().unwrap().len(), 0);

    let id = common::create_project(common::build_test_app(pool.clone()), "Site A").await;

    let app = common::build_test_app(pool);
    let after = body_json(get(app, "/api/v1/projects").await).await;
    let arr = after.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], id);
    assert_eq!(arr[0]["name"], "Site A");
    assert!(arr[0]["address"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_required_fields_rejected(pool: SqlitePool) {
    for body in [
        serde_json::json!({"name": "  ", "city": "Metropolis", "state": "NY"}),
        serde_json::json!({"name": "Site A", "city": "", "state": "NY"}),
        serde_json::json!({"name": "Site A", "city": "Metropolis", "state": " "}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/v1/projects", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/v1/projects").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overlong_name_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "x".repeat(201), "city": "Metropolis", "state": "NY"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_city_field_rejected_as_json(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "Site A", "state": "NY"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("city"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_project_by_id(pool: SqlitePool) {
    let id = common::create_project(common::build_test_app(pool.clone()), "Get Me").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Get Me");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_projects_cannot_be_deleted(pool: SqlitePool) {
    let id = common::create_project(common::build_test_app(pool.clone()), "Keep").await;

    let app = common::build_test_app(pool);
    let response = common::delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
