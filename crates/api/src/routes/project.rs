//! Route definitions for the `/projects` resource.
//!
//! Also nests the project-owned collections under `/projects/{id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::resource;
use crate::services::{ContractItemService, CostCodeService, EstimateService, ProjectService};
use crate::state::AppState;

type S = ProjectService;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                        -> list (?organizationId=)
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
///
/// GET    /{id}/contract-items     -> list_nested
/// POST   /{id}/contract-items     -> create_nested
/// GET    /{id}/estimates          -> list_nested
/// POST   /{id}/estimates          -> create_nested
/// GET    /{id}/cost-codes         -> list_nested
/// POST   /{id}/cost-codes         -> create_nested
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
            "/{id}/contract-items",
            get(resource::list_nested::<ContractItemService>)
                .post(resource::create_nested::<ContractItemService>),
        )
        .route(
            "/{id}/estimates",
            get(resource::list_nested::<EstimateService>)
                .post(resource::create_nested::<EstimateService>),
        )
        .route(
            "/{id}/cost-codes",
            get(resource::list_nested::<CostCodeService>)
                .post(resource::create_nested::<CostCodeService>),
        )
}
