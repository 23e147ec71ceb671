//! Body extractors that run the schema gate before a handler sees the data.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;
use tabsheet_core::schema::{self, Resource};

use crate::error::AppError;

/// A JSON body, with malformed or non-JSON payloads rejected as a
/// JSON-formatted 400.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// A request body that has passed its resource schema and content rules.
///
/// Use on flat create routes and on updates; nested create routes take
/// [`JsonBody`] and call [`schema::validate_nested`] with the path id.
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: Resource,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(body) = JsonBody::from_request(req, state).await?;
        let resource = schema::validate::<T>(&body)?;
        Ok(Self(resource))
    }
}
