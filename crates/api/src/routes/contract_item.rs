//! Route definitions for the `/contract-items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource;
use crate::services::{ContractItemService, TabItemService};
use crate::state::AppState;

type S = ContractItemService;

/// Routes mounted at `/contract-items`.
///
/// ```text
/// GET    /                    -> list (?projectId=)
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
///
/// GET    /{id}/tab-items      -> list_nested
/// POST   /{id}/tab-items      -> create_nested
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
            "/{id}/tab-items",
            get(resource::list_nested::<TabItemService>)
                .post(resource::create_nested::<TabItemService>),
        )
}
