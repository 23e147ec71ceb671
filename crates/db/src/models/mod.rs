//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO plus its body schema
//! - A `Deserialize` update DTO (all `Option` fields) for partial merges
//! - A filter struct ANDed into scoped lookups (child entities only)
//!
//! Entities serialize in camelCase with timestamps as Unix seconds; the
//! `object` tag is added by [`ApiObject`] at the HTTP boundary.

use serde::Serialize;
use tabsheet_core::types::DbId;

pub mod contract_item;
pub mod cost_code;
pub mod estimate;
pub mod estimate_item;
pub mod organization;
pub mod project;
pub mod tab_item;

/// A row that is returned to API clients.
pub trait ApiObject: Serialize {
    /// Fixed `object` tag of the entity (`"project"`, `"tab-item"`, ...).
    const OBJECT: &'static str;

    fn id(&self) -> DbId;
}
