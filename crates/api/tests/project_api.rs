//! HTTP-level integration tests for `/projects` and
//! `/organizations/{id}/projects`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, id_of, post_json, put_json, test_project, with};
use sqlx::PgPool;

/// The body of a created project: the submitted fields plus the API object
/// properties, and nothing else.
fn assert_project_body(json: &serde_json::Value) {
    let expected = with(
        test_project(),
        serde_json::json!({
            "object": "project",
            "id": json["id"],
            "createdAt": json["createdAt"],
            "updatedAt": json["updatedAt"],
        }),
    );
    assert_eq!(json, &expected);
    assert!(json["id"].is_string());
    assert!(json["createdAt"].is_i64());
    assert!(json["updatedAt"].is_i64());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_from_organizations_endpoint(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/organizations/{}/projects", member.organization_id),
        &member.token,
        test_project(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_project_body(&body_json(response).await);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_from_projects_endpoint(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        &member.token,
        with(
            test_project(),
            serde_json::json!({ "organizationId": member.organization_id }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_project_body(&body_json(response).await);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cannot_create_project_in_foreign_organization(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;

    let app = common::build_test_app(pool.clone());
    let nested = post_json(
        app,
        &format!("/api/v1/organizations/{}/projects", other.organization_id),
        &member.token,
        test_project(),
    )
    .await;

    let app = common::build_test_app(pool);
    let flat = post_json(
        app,
        "/api/v1/projects",
        &member.token,
        with(
            test_project(),
            serde_json::json!({ "organizationId": other.organization_id }),
        ),
    )
    .await;

    assert_eq!(nested.status(), StatusCode::NOT_FOUND);
    assert_eq!(flat.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cannot_create_project_in_missing_organization(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;

    let app = common::build_test_app(pool.clone());
    let flat = post_json(
        app,
        "/api/v1/projects",
        &member.token,
        with(
            test_project(),
            serde_json::json!({ "organizationId": "does-not-exist" }),
        ),
    )
    .await;

    let app = common::build_test_app(pool);
    let nested = post_json(
        app,
        "/api/v1/organizations/does-not-exist/projects",
        &member.token,
        test_project(),
    )
    .await;

    assert_eq!(flat.status(), StatusCode::NOT_FOUND);
    assert_eq!(nested.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_flat_create_requires_organization_id(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/projects", &member.token, test_project()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    common::assert_violation(&json, "organizationId", "required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_nested_create_rejects_organization_id_in_body(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/organizations/{}/projects", member.organization_id),
        &member.token,
        with(
            test_project(),
            serde_json::json!({ "organizationId": member.organization_id }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    common::assert_violation(&json, "organizationId", "extra");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_reports_every_violation(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/organizations/{}/projects", member.organization_id),
        &member.token,
        serde_json::json!({ "description": 5, "active": "yes", "test": "invalid-prop" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    common::assert_violation(&json, "name", "required");
    common::assert_violation(&json, "projectNumber", "required");
    common::assert_violation(&json, "description", "string");
    common::assert_violation(&json, "active", "boolean");
    common::assert_violation(&json, "test", "extra");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_project_number_is_scoped_to_organization(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;

    common::create_project(&pool, &member).await;

    // Same organization: rejected.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/organizations/{}/projects", member.organization_id),
        &member.token,
        test_project(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "A project with that projectNumber already exists."
    );

    // Different organization: accepted.
    common::create_project(&pool, &other).await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_projects_is_scoped(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/projects", &member.token).await).await;
    assert_eq!(json["object"], "list");
    assert_eq!(json["data"], serde_json::json!([]));

    common::create_project(&pool, &member).await;
    common::create(
        &pool,
        &format!("/api/v1/organizations/{}/projects", member.organization_id),
        &member.token,
        with(test_project(), serde_json::json!({ "projectNumber": "other-project-number" })),
    )
    .await;
    common::create_project(&pool, &other).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/projects", &member.token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert!(json["data"][0].get("organizationId").is_none());

    let app = common::build_test_app(pool);
    let json = body_json(
        get(
            app,
            &format!("/api/v1/organizations/{}/projects", member.organization_id),
            &member.token,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_nested_list_of_foreign_organization_is_not_found(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/organizations/{}/projects", other.organization_id),
        &member.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_projects_paginates(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    for n in 0..3 {
        common::create(
            &pool,
            "/api/v1/projects",
            &member.token,
            with(
                test_project(),
                serde_json::json!({
                    "organizationId": member.organization_id,
                    "projectNumber": format!("P-{n}"),
                }),
            ),
        )
        .await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/projects?page=1&pageSize=2", &member.token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["metadata"]["object"], "metadata");
    assert_eq!(json["metadata"]["count"], 2);
    assert_eq!(json["metadata"]["self"], "/api/v1/projects?page=1&pageSize=2");
    assert_eq!(json["metadata"]["next"], "/api/v1/projects?page=2&pageSize=2");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects?page=2&pageSize=2", &member.token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["projectNumber"], "P-2");
    assert!(json["metadata"]["next"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_project_of_other_organization_is_not_found(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;
    let project = common::create_project(&pool, &other).await;

    let app = common::build_test_app(pool.clone());
    let foreign = get(
        app,
        &format!("/api/v1/projects/{}", id_of(&project)),
        &member.token,
    )
    .await;
    let foreign_status = foreign.status();
    let foreign_body = body_json(foreign).await;

    let app = common::build_test_app(pool.clone());
    let missing = get(
        app,
        &format!("/api/v1/projects/{}", uuid::Uuid::now_v7()),
        &member.token,
    )
    .await;

    let app = common::build_test_app(pool);
    let malformed = get(app, "/api/v1/projects/not-a-uuid", &member.token).await;

    assert_eq!(foreign_status, StatusCode::NOT_FOUND);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(malformed.status(), StatusCode::NOT_FOUND);
    assert_eq!(foreign_body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_merges_present_fields(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let project = common::create_project(&pool, &member).await;
    let uri = format!("/api/v1/projects/{}", id_of(&project));

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &uri,
        &member.token,
        serde_json::json!({ "name": "renamed", "active": false }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "renamed");
    assert_eq!(json["active"], false);
    assert_eq!(json["projectNumber"], "test-project-number");
    assert_eq!(json["client"], "test-client");
    assert_eq!(json["createdAt"], project["createdAt"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_cannot_move_project(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let project = common::create_project(&pool, &member).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{}", id_of(&project)),
        &member.token,
        serde_json::json!({ "organizationId": member.organization_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    common::assert_violation(&json, "organizationId", "extra");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_foreign_project_is_not_found(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;
    let project = common::create_project(&pool, &other).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{}", id_of(&project)),
        &member.token,
        serde_json::json!({ "name": "hijacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project_returns_204_then_404(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let project = common::create_project(&pool, &member).await;
    let uri = format!("/api/v1/projects/{}", id_of(&project));

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &uri, &member.token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &uri, &member.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_foreign_project_is_not_found(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;
    let project = common::create_project(&pool, &other).await;
    let uri = format!("/api/v1/projects/{}", id_of(&project));

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &uri, &member.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Still there for its owner.
    let app = common::build_test_app(pool);
    let response = get(app, &uri, &other.token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
