//! Contract items (bid line items), owned by a project.

use async_trait::async_trait;
use tabsheet_core::context::{ReadContext, ReadManyContext, WriteContext};
use tabsheet_core::error::CoreResult;
use tabsheet_core::types::DbId;
use tabsheet_db::models::contract_item::{
    ContractItem, ContractItemFilter, CreateContractItem, UpdateContractItem,
};
use tabsheet_db::models::project::Project;
use tabsheet_db::repositories::ContractItemRepo;
use tabsheet_db::{DbPool, StoreResult};

use super::{NestedService, ProjectService, ScopedService};

pub struct ContractItemService {
    pool: DbPool,
}

#[async_trait]
impl ScopedService for ContractItemService {
    type Entity = ContractItem;
    type Filter = ContractItemFilter;
    type Create = CreateContractItem;
    type Update = UpdateContractItem;
    type Parent = Project;

    const UNIQUE_FIELD: Option<&'static str> = Some("itemNumber");

    fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find(&self, id: DbId, ctx: &ReadContext<ContractItemFilter>) -> StoreResult<Option<ContractItem>> {
        ContractItemRepo::find_scoped(&self.pool, id, ctx.user.organization_id, &ctx.filter).await
    }

    async fn find_many(&self, ctx: &ReadManyContext<ContractItemFilter>) -> StoreResult<Vec<ContractItem>> {
        ContractItemRepo::list_scoped(
            &self.pool,
            ctx.user.organization_id,
            &ctx.filter,
            ctx.pagination.limit(),
            ctx.pagination.offset(),
        )
        .await
    }

    async fn resolve_parent(&self, ctx: &WriteContext<CreateContractItem>) -> CoreResult<Project> {
        ProjectService::new(self.pool.clone())
            .get_by_id(&ctx.resource.project_id, &ctx.read())
            .await
    }

    async fn insert(&self, ctx: &WriteContext<CreateContractItem>, project: Project) -> StoreResult<ContractItem> {
        ContractItemRepo::insert(&self.pool, project.id, &ctx.resource).await
    }

    fn merge(row: ContractItem, patch: UpdateContractItem) -> ContractItem {
        row.merge(patch)
    }

    async fn save(&self, row: &ContractItem) -> StoreResult<ContractItem> {
        ContractItemRepo::update(&self.pool, row).await
    }

    async fn remove(&self, id: DbId) -> StoreResult<bool> {
        ContractItemRepo::delete(&self.pool, id).await
    }
}

impl NestedService for ContractItemService {
    type ParentService = ProjectService;

    fn parent_filter(project_id: DbId) -> ContractItemFilter {
        ContractItemFilter {
            project_id: Some(project_id),
        }
    }
}
