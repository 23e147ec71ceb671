#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use tabsheet_api::auth::jwt::{generate_access_token, JwtConfig};
use tabsheet_api::config::ServerConfig;
use tabsheet_api::router::build_app_router;
use tabsheet_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough-for-hs256";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_max_connections: 5,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            issuer: None,
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A bearer token for `user_id`, optionally belonging to `organization_id`.
pub fn token(user_id: &str, organization_id: Option<Uuid>) -> String {
    generate_access_token(user_id, organization_id, &test_config().jwt).unwrap()
}

/// A signed-in user and the organization they created.
pub struct Member {
    pub organization_id: Uuid,
    pub token: String,
}

/// Create an organization as `user_id` and return a token that belongs to it.
pub async fn member(pool: &PgPool, user_id: &str, org_name: &str) -> Member {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/organizations",
        &token(user_id, None),
        serde_json::json!({ "name": org_name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let organization_id = id_of(&body_json(response).await);
    Member {
        organization_id,
        token: token(user_id, Some(organization_id)),
    }
}

/// Parse the `id` of a response body.
pub fn id_of(json: &serde_json::Value) -> Uuid {
    json["id"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("response has no uuid id: {json}"))
}

/// POST a JSON body as the given caller and return the created body,
/// asserting 201.
pub async fn create(pool: &PgPool, uri: &str, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(build_test_app(pool.clone()), uri, token, body).await;
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, StatusCode::CREATED, "POST {uri} failed: {json}");
    json
}

pub fn test_project() -> serde_json::Value {
    serde_json::json!({
        "name": "test-project",
        "projectNumber": "test-project-number",
        "description": "This is a test project",
        "client": "test-client",
        "active": true,
    })
}

pub fn test_contract_item() -> serde_json::Value {
    serde_json::json!({
        "itemNumber": "9999-9999",
        "description": "test-description",
        "quantity": 33.35,
        "unit": "EA",
        "unitPrice": 6667,
    })
}

pub fn test_estimate() -> serde_json::Value {
    serde_json::json!({
        "estimateNumber": "EST-001",
        "periodEnding": "2026-03-31",
    })
}

pub fn test_tab_item() -> serde_json::Value {
    serde_json::json!({
        "tabSet": "test-tab-set",
        "quantity": 45.56,
        "remarks": "Test remarks",
        "street": "test street",
        "side": "test side",
        "beginStation": 4565,
        "endStation": 5469,
    })
}

/// Merge the keys of `extra` into a copy of `base`.
pub fn with(base: serde_json::Value, extra: serde_json::Value) -> serde_json::Value {
    let mut merged = base;
    if let (Some(target), Some(source)) = (merged.as_object_mut(), extra.as_object()) {
        for (k, v) in source {
            target.insert(k.clone(), v.clone());
        }
    }
    merged
}

/// Create a project in the member's organization through the nested route.
pub async fn create_project(pool: &PgPool, member: &Member) -> serde_json::Value {
    create(
        pool,
        &format!("/api/v1/organizations/{}/projects", member.organization_id),
        &member.token,
        test_project(),
    )
    .await
}

/// Create a contract item under `project_id` through the nested route.
pub async fn create_contract_item(
    pool: &PgPool,
    member: &Member,
    project_id: Uuid,
    body: serde_json::Value,
) -> serde_json::Value {
    create(
        pool,
        &format!("/api/v1/projects/{project_id}/contract-items"),
        &member.token,
        body,
    )
    .await
}

/// Assert that `details` contains a violation of `rule` on `field`.
pub fn assert_violation(json: &serde_json::Value, field: &str, rule: &str) {
    let details = json["details"]
        .as_array()
        .unwrap_or_else(|| panic!("response has no details: {json}"));
    assert!(
        details
            .iter()
            .any(|d| d["field"] == field && d["rule"] == rule),
        "expected a `{rule}` violation on `{field}`, got {json}"
    );
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, token: &str, body: Option<serde_json::Value>) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"));
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, token, None).await
}

pub async fn post_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, token: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, token, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
