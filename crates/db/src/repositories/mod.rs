//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async functions that
//! accept `&PgPool` as the first argument and take/return plain records.
//!
//! Every read is scoped: it takes the caller's `organization_id` and joins up
//! the ownership chain, so a row owned by another organization is simply not
//! found. Passing `None` as the organization matches nothing.

pub mod contract_item_repo;
pub mod cost_code_repo;
pub mod estimate_item_repo;
pub mod estimate_repo;
pub mod organization_repo;
pub mod project_repo;
pub mod tab_item_repo;

pub use contract_item_repo::ContractItemRepo;
pub use cost_code_repo::CostCodeRepo;
pub use estimate_item_repo::EstimateItemRepo;
pub use estimate_repo::EstimateRepo;
pub use organization_repo::OrganizationRepo;
pub use project_repo::ProjectRepo;
pub use tab_item_repo::TabItemRepo;
