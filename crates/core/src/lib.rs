//! Domain building blocks shared by the store and HTTP layers.
//!
//! Nothing in this crate touches the database or the network: it holds the
//! id/timestamp conventions, the error taxonomy, the per-request context
//! types, pagination math and the declarative body schemas.

pub mod context;
pub mod error;
pub mod pagination;
pub mod schema;
pub mod types;
