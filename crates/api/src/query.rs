//! Shared query parameter types for API handlers.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tabsheet_core::pagination::Pagination;

use crate::error::AppError;

/// Pagination parameters (`?page=&pageSize=`).
///
/// Out-of-range values are clamped by [`Pagination::new`] rather than
/// rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }
}

/// Query string extractor whose rejection is a JSON 400 instead of axum's
/// plain-text default. Unknown keys are ignored, so one query string can
/// feed both [`ListParams`] and an entity filter.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
