//! Route definitions for the `/estimates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource;
use crate::services::{EstimateItemService, EstimateService};
use crate::state::AppState;

type S = EstimateService;

/// Routes mounted at `/estimates`.
///
/// ```text
/// GET    /                       -> list (?projectId=)
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
///
/// GET    /{id}/estimate-items    -> list_nested
/// POST   /{id}/estimate-items    -> create_nested
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list::<S>).post(resource::create::<S>))
        .route(
            "/{id}",
            get(resource::get_by_id::<S>)
                .put(resource::update::<S>)
                .delete(resource::delete::<S>),
        )
        .route(
            "/{id}/estimate-items",
            get(resource::list_nested::<EstimateItemService>)
                .post(resource::create_nested::<EstimateItemService>),
        )
}
