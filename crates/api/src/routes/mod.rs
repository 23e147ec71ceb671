pub mod contract_item;
pub mod cost_code;
pub mod estimate;
pub mod estimate_item;
pub mod health;
pub mod organization;
pub mod project;
pub mod tab_item;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /organizations                                   list, create
/// /organizations/{id}                              get, update, delete
/// /organizations/{id}/projects                     list, create (nested)
///
/// /projects                                        list, create (organizationId in body)
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/contract-items                    list, create (nested)
/// /projects/{id}/estimates                         list, create (nested)
/// /projects/{id}/cost-codes                        list, create (nested)
///
/// /contract-items                                  list, create (projectId in body)
/// /contract-items/{id}                             get, update, delete
/// /contract-items/{id}/tab-items                   list, create (nested)
///
/// /estimates                                       list, create (projectId in body)
/// /estimates/{id}                                  get, update, delete
/// /estimates/{id}/estimate-items                   list, create (nested)
///
/// /cost-codes                                      list, create (projectId in body)
/// /cost-codes/{id}                                 get, update, delete
///
/// /tab-items                                       list, create (contractItemId in body)
/// /tab-items/{id}                                  get, update, delete
///
/// /estimate-items                                  list, create (estimateId in body)
/// /estimate-items/{id}                             get, update, delete
/// ```
///
/// Every route requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/organizations", organization::router())
        .nest("/projects", project::router())
        .nest("/contract-items", contract_item::router())
        .nest("/estimates", estimate::router())
        .nest("/cost-codes", cost_code::router())
        .nest("/tab-items", tab_item::router())
        .nest("/estimate-items", estimate_item::router())
}
