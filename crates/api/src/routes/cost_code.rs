//! Route definitions for the `/cost-codes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource;
use crate::services::CostCodeService;
use crate::state::AppState;

type S = CostCodeService;

/// Routes mounted at `/cost-codes`.
///
/// ```text
/// GET    /          -> list (?projectId=)
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
