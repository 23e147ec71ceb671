//! Organizations: the root of the ownership tree.
//!
//! Any authenticated user may create one. Reads only ever return the
//! caller's own organization.

use async_trait::async_trait;
use tabsheet_core::context::{ReadContext, ReadManyContext, WriteContext};
use tabsheet_core::error::CoreResult;
use tabsheet_core::types::DbId;
use tabsheet_db::models::organization::{
    CreateOrganization, Organization, OrganizationFilter, UpdateOrganization,
};
use tabsheet_db::repositories::OrganizationRepo;
use tabsheet_db::{DbPool, StoreResult};

use super::ScopedService;

pub struct OrganizationService {
    pool: DbPool,
}

#[async_trait]
impl ScopedService for OrganizationService {
    type Entity = Organization;
    type Filter = OrganizationFilter;
    type Create = CreateOrganization;
    type Update = UpdateOrganization;
    type Parent = ();

    const UNIQUE_FIELD: Option<&'static str> = None;

    fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find(
        &self,
        id: DbId,
        ctx: &ReadContext<OrganizationFilter>,
    ) -> StoreResult<Option<Organization>> {
        OrganizationRepo::find_scoped(&self.pool, id, ctx.user.organization_id).await
    }

    async fn find_many(
        &self,
        ctx: &ReadManyContext<OrganizationFilter>,
    ) -> StoreResult<Vec<Organization>> {
        OrganizationRepo::list_scoped(
            &self.pool,
            ctx.user.organization_id,
            ctx.pagination.limit(),
            ctx.pagination.offset(),
        )
        .await
    }

    async fn resolve_parent(&self, _ctx: &WriteContext<CreateOrganization>) -> CoreResult<()> {
        Ok(())
    }

    async fn insert(
        &self,
        ctx: &WriteContext<CreateOrganization>,
        _parent: (),
    ) -> StoreResult<Organization> {
        OrganizationRepo::insert(&self.pool, &ctx.resource).await
    }

    fn merge(row: Organization, patch: UpdateOrganization) -> Organization {
        row.merge(patch)
    }

    async fn save(&self, row: &Organization) -> StoreResult<Organization> {
        OrganizationRepo::update(&self.pool, row).await
    }

    async fn remove(&self, id: DbId) -> StoreResult<bool> {
        OrganizationRepo::delete(&self.pool, id).await
    }
}
