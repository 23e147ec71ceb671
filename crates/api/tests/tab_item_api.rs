//! HTTP-level integration tests for `/tab-items` and
//! `/contract-items/{id}/tab-items`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, id_of, post_json, put_json, test_contract_item, test_tab_item, with, Member};
use sqlx::PgPool;
use uuid::Uuid;

async fn contract_item_for(pool: &PgPool, member: &Member) -> Uuid {
    let project = common::create_project(pool, member).await;
    let item = common::create_contract_item(pool, member, id_of(&project), test_contract_item()).await;
    id_of(&item)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_tab_item_via_contract_items_endpoint(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let contract_item_id = contract_item_for(&pool, &member).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/contract-items/{contract_item_id}/tab-items"),
        &member.token,
        test_tab_item(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let expected = with(
        test_tab_item(),
        serde_json::json!({
            "object": "tab-item",
            "id": json["id"],
            "contractItemId": contract_item_id,
            "createdAt": json["createdAt"],
            "updatedAt": json["updatedAt"],
        }),
    );
    assert_eq!(json, expected);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_tab_item_via_tab_items_endpoint(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let contract_item_id = contract_item_for(&pool, &member).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tab-items",
        &member.token,
        with(test_tab_item(), serde_json::json!({ "contractItemId": contract_item_id })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["object"], "tab-item");
    assert_eq!(json["contractItemId"], contract_item_id.to_string());
    assert_eq!(json["quantity"], 45.56);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tab_item_only_requires_quantity(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let contract_item_id = contract_item_for(&pool, &member).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/contract-items/{contract_item_id}/tab-items"),
        &member.token,
        serde_json::json!({ "quantity": 1.5 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json.get("tabSet").is_none());
    assert!(json.get("beginStation").is_none());
    assert_eq!(json["quantity"], 1.5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cannot_create_tab_item_on_foreign_contract_item(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;
    let foreign = contract_item_for(&pool, &other).await;

    let app = common::build_test_app(pool.clone());
    let nested = post_json(
        app,
        &format!("/api/v1/contract-items/{foreign}/tab-items"),
        &member.token,
        test_tab_item(),
    )
    .await;
    assert_eq!(nested.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let flat = post_json(
        app,
        "/api/v1/tab-items",
        &member.token,
        with(test_tab_item(), serde_json::json!({ "contractItemId": foreign })),
    )
    .await;
    assert_eq!(flat.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let missing = post_json(
        app,
        "/api/v1/tab-items",
        &member.token,
        with(test_tab_item(), serde_json::json!({ "contractItemId": "does-not-exist" })),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_tab_item_with_missing_properties(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/tab-items", &member.token, serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    common::assert_violation(&json, "contractItemId", "required");
    common::assert_violation(&json, "quantity", "required");
    assert_eq!(json["details"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_tab_item_with_extra_properties(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let contract_item_id = contract_item_for(&pool, &member).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/contract-items/{contract_item_id}/tab-items"),
        &member.token,
        with(
            test_tab_item(),
            serde_json::json!({ "contractItemId": contract_item_id, "foo": "bar" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    common::assert_violation(&json, "contractItemId", "extra");
    common::assert_violation(&json, "foo", "extra");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_tab_item_with_invalid_properties(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tab-items",
        &member.token,
        serde_json::json!({
            "contractItemId": 45,
            "tabSet": 1,
            "quantity": "45.56",
            "remarks": true,
            "street": [],
            "side": {},
            "beginStation": 45.67,
            "endStation": 45.67,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    common::assert_violation(&json, "contractItemId", "string");
    common::assert_violation(&json, "tabSet", "string");
    common::assert_violation(&json, "quantity", "number");
    common::assert_violation(&json, "remarks", "string");
    common::assert_violation(&json, "street", "string");
    common::assert_violation(&json, "side", "string");
    common::assert_violation(&json, "beginStation", "integer");
    common::assert_violation(&json, "endStation", "integer");
    assert_eq!(json["details"].as_array().unwrap().len(), 8);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_tab_items(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let other = common::member(&pool, "other-user", "other-org").await;
    let mine = contract_item_for(&pool, &member).await;
    let theirs = contract_item_for(&pool, &other).await;

    let nested = format!("/api/v1/contract-items/{mine}/tab-items");
    common::create(&pool, &nested, &member.token, test_tab_item()).await;
    common::create(&pool, &nested, &member.token, test_tab_item()).await;
    common::create(
        &pool,
        &format!("/api/v1/contract-items/{theirs}/tab-items"),
        &other.token,
        test_tab_item(),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &nested, &member.token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["metadata"]["count"], 2);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/tab-items", &other.token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/contract-items/{theirs}/tab-items"),
        &member.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_and_delete_tab_item(pool: PgPool) {
    let member = common::member(&pool, "user-1", "test-org").await;
    let contract_item_id = contract_item_for(&pool, &member).await;
    let tab = common::create(
        &pool,
        &format!("/api/v1/contract-items/{contract_item_id}/tab-items"),
        &member.token,
        test_tab_item(),
    )
    .await;
    let uri = format!("/api/v1/tab-items/{}", id_of(&tab));

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &uri,
        &member.token,
        serde_json::json!({ "quantity": 50.0, "side": "north" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["quantity"], 50.0);
    assert_eq!(json["side"], "north");
    assert_eq!(json["street"], "test street");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &uri, &member.token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &uri, &member.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
