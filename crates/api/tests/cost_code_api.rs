//! HTTP-level integration tests for `/cost-codes` and
//! `/projects/{id}/cost-codes`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, id_of, post_json, put_json, with};
use sqlx::PgPool;

fn test_cost_code() -> serde_json::Value {
    serde_json::json!({
        "code": "01-100",
        "description": "Mobilization",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cost_code(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let project = common::create_project(&pool, &member).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/cost-codes",
        &member.token,
        with(test_cost_code(), serde_json::json!({ "projectId": project["id"] })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let expected = with(
        test_cost_code(),
        serde_json::json!({
            "object": "cost-code",
            "id": json["id"],
            "projectId": project["id"],
            "createdAt": json["createdAt"],
            "updatedAt": json["updatedAt"],
        }),
    );
    assert_eq!(json, expected);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cost_code_without_description(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let project = common::create_project(&pool, &member).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{}/cost-codes", id_of(&project)),
        &member.token,
        serde_json::json!({ "code": "02-200" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({
            "object": "cost-code",
            "id": json["id"],
            "projectId": project["id"],
            "code": "02-200",
            "createdAt": json["createdAt"],
            "updatedAt": json["updatedAt"],
        })
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_cost_code(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let project = common::create_project(&pool, &member).await;
    let uri = format!("/api/v1/projects/{}/cost-codes", id_of(&project));

    common::create(&pool, &uri, &member.token, test_cost_code()).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, &uri, &member.token, test_cost_code()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "A cost-code with that code already exists.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cost_code_in_foreign_project(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;
    let foreign = common::create_project(&pool, &other).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{}/cost-codes", id_of(&foreign)),
        &member.token,
        test_cost_code(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_and_delete_cost_code(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;
    let project = common::create_project(&pool, &member).await;
    let code = common::create(
        &pool,
        &format!("/api/v1/projects/{}/cost-codes", id_of(&project)),
        &member.token,
        test_cost_code(),
    )
    .await;
    let uri = format!("/api/v1/cost-codes/{}", id_of(&code));

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &uri,
        &other.token,
        serde_json::json!({ "description": "Hijacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &uri,
        &member.token,
        serde_json::json!({ "description": "Demobilization" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["description"], "Demobilization");
    assert_eq!(json["code"], "01-100");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &uri, &member.token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/cost-codes", &member.token).await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}
