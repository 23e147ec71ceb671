//! Route definitions for the `/estimate-items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource;
use crate::services::EstimateItemService;
use crate::state::AppState;

type S = EstimateItemService;

/// Routes mounted at `/estimate-items`.
///
/// ```text
/// GET    /          -> list (?estimateId=)
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
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
}
