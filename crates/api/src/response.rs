//! Shared response envelope types for API handlers.
//!
//! Single resources are returned as the entity's own fields plus an
//! `object` tag; lists as `{ "object": "list", "data": [...], "metadata": ... }`.

use serde::Serialize;
use tabsheet_core::pagination::ListMetadata;
use tabsheet_db::models::ApiObject;

/// A single entity tagged with its `object` kind.
///
/// # Example
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(ApiBody::new(project))))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiBody<T: ApiObject> {
    pub object: &'static str,
    #[serde(flatten)]
    pub inner: T,
}

impl<T: ApiObject> ApiBody<T> {
    pub fn new(inner: T) -> Self {
        Self {
            object: T::OBJECT,
            inner,
        }
    }
}

/// `{ "object": "list", "data": [...], "metadata": {...} }` envelope.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: ApiObject> {
    pub object: &'static str,
    pub data: Vec<ApiBody<T>>,
    pub metadata: ListMetadata,
}

impl<T: ApiObject> ListResponse<T> {
    pub fn new(rows: Vec<T>, metadata: ListMetadata) -> Self {
        Self {
            object: "list",
            data: rows.into_iter().map(ApiBody::new).collect(),
            metadata,
        }
    }
}
