//! Generic CRUD handlers shared by every entity.

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use tabsheet_core::context::{Principal, ReadContext, ReadManyContext, WriteContext};
use tabsheet_core::schema;
use tabsheet_db::models::ApiObject;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::validated::{JsonBody, Validated};
use crate::query::{ApiQuery, ListParams};
use crate::response::{ApiBody, ListResponse};
use crate::services::{NestedService, ScopedService};
use crate::state::AppState;

/// POST /api/v1/{entities}
///
/// The parent id travels in the body and is resolved through the caller's
/// scope (404 when not visible).
pub async fn create<S: ScopedService>(
    State(state): State<AppState>,
    user: AuthUser,
    Validated(input): Validated<S::Create>,
) -> AppResult<(StatusCode, Json<ApiBody<S::Entity>>)> {
    let ctx = WriteContext::new(user.into(), input);
    let row = S::new(state.pool).create_by_parent_id(ctx).await?;
    Ok((StatusCode::CREATED, Json(ApiBody::new(row))))
}

/// POST /api/v1/{parents}/{id}/{entities}
///
/// The parent id comes from the path; sending it in the body as well is a
/// validation error.
pub async fn create_nested<S: NestedService>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(parent_id): Path<String>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<ApiBody<S::Entity>>)> {
    let input = schema::validate_nested::<S::Create>(&body, &parent_id)?;
    let ctx = WriteContext::new(user.into(), input);
    let row = S::new(state.pool).create_by_parent_id(ctx).await?;
    Ok((StatusCode::CREATED, Json(ApiBody::new(row))))
}

/// GET /api/v1/{entities}?page=&pageSize=&{parentId}=
pub async fn list<S: ScopedService>(
    State(state): State<AppState>,
    user: AuthUser,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<ListParams>,
    ApiQuery(filter): ApiQuery<S::Filter>,
) -> AppResult<Json<ListResponse<S::Entity>>> {
    let ctx = ReadManyContext::new(user.into(), filter, params.pagination());
    let rows = S::new(state.pool).list(&ctx).await?;
    let metadata = ctx.pagination.metadata(uri.path(), rows.len());
    Ok(Json(ListResponse::new(rows, metadata)))
}

/// GET /api/v1/{parents}/{id}/{entities}?page=&pageSize=
///
/// 404 when the parent is not visible to the caller; otherwise the
/// parent's children, possibly none.
pub async fn list_nested<S: NestedService>(
    State(state): State<AppState>,
    user: AuthUser,
    OriginalUri(uri): OriginalUri,
    Path(parent_id): Path<String>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Json<ListResponse<S::Entity>>> {
    let principal = Principal::from(user);
    let parent = S::ParentService::new(state.pool.clone())
        .get_by_id(&parent_id, &ReadContext::new(principal.clone()))
        .await?;

    let filter = S::parent_filter(parent.id());
    let ctx = ReadManyContext::new(principal, filter, params.pagination());
    let rows = S::new(state.pool).list(&ctx).await?;
    let metadata = ctx.pagination.metadata(uri.path(), rows.len());
    Ok(Json(ListResponse::new(rows, metadata)))
}

/// GET /api/v1/{entities}/{id}
pub async fn get_by_id<S: ScopedService>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ApiBody<S::Entity>>> {
    let row = S::new(state.pool)
        .get_by_id(&id, &ReadContext::new(user.into()))
        .await?;
    Ok(Json(ApiBody::new(row)))
}

/// PUT /api/v1/{entities}/{id}
///
/// Partial update: only the fields present in the body are changed.
pub async fn update<S: ScopedService>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Validated(patch): Validated<S::Update>,
) -> AppResult<Json<ApiBody<S::Entity>>> {
    let ctx = WriteContext::new(user.into(), patch);
    let row = S::new(state.pool).update(&id, ctx).await?;
    Ok(Json(ApiBody::new(row)))
}

/// DELETE /api/v1/{entities}/{id}
pub async fn delete<S: ScopedService>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    S::new(state.pool)
        .delete(&id, &ReadContext::new(user.into()))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
