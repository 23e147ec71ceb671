//! Route definitions for the `/tab-items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource;
use crate::services::TabItemService;
use crate::state::AppState;

type S = TabItemService;

/// Routes mounted at `/tab-items`.
///
/// ```text
/// GET    /          -> list (?contractItemId=)
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
