//! Route definitions for the `/organizations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource;
use crate::services::{OrganizationService, ProjectService};
use crate::state::AppState;

type S = OrganizationService;

/// Routes mounted at `/organizations`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
///
/// GET    /{id}/projects     -> list_nested
/// POST   /{id}/projects     -> create_nested
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
            "/{id}/projects",
            get(resource::list_nested::<ProjectService>)
                .post(resource::create_nested::<ProjectService>),
        )
}
