//! Tab items: field-measured quantities recorded against a contract item.

use async_trait::async_trait;
use tabsheet_core::context::{ReadContext, ReadManyContext, WriteContext};
use tabsheet_core::error::CoreResult;
use tabsheet_core::types::DbId;
use tabsheet_db::models::contract_item::ContractItem;
use tabsheet_db::models::tab_item::{CreateTabItem, TabItem, TabItemFilter, UpdateTabItem};
use tabsheet_db::repositories::TabItemRepo;
use tabsheet_db::{DbPool, StoreResult};

use super::{ContractItemService, NestedService, ScopedService};

pub struct TabItemService {
    pool: DbPool,
}

#[async_trait]
impl ScopedService for TabItemService {
    type Entity = TabItem;
    type Filter = TabItemFilter;
    type Create = CreateTabItem;
    type Update = UpdateTabItem;
    type Parent = ContractItem;

    // Tab items carry no natural key.
    const UNIQUE_FIELD: Option<&'static str> = None;

    fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find(&self, id: DbId, ctx: &ReadContext<TabItemFilter>) -> StoreResult<Option<TabItem>> {
        TabItemRepo::find_scoped(&self.pool, id, ctx.user.organization_id, &ctx.filter).await
    }

    async fn find_many(&self, ctx: &ReadManyContext<TabItemFilter>) -> StoreResult<Vec<TabItem>> {
        TabItemRepo::list_scoped(
            &self.pool,
            ctx.user.organization_id,
            &ctx.filter,
            ctx.pagination.limit(),
            ctx.pagination.offset(),
        )
        .await
    }

    async fn resolve_parent(&self, ctx: &WriteContext<CreateTabItem>) -> CoreResult<ContractItem> {
        ContractItemService::new(self.pool.clone())
            .get_by_id(&ctx.resource.contract_item_id, &ctx.read())
            .await
    }

    async fn insert(
        &self,
        ctx: &WriteContext<CreateTabItem>,
        contract_item: ContractItem,
    ) -> StoreResult<TabItem> {
        TabItemRepo::insert(&self.pool, contract_item.id, &ctx.resource).await
    }

    fn merge(row: TabItem, patch: UpdateTabItem) -> TabItem {
        row.merge(patch)
    }

    async fn save(&self, row: &TabItem) -> StoreResult<TabItem> {
        TabItemRepo::update(&self.pool, row).await
    }

    async fn remove(&self, id: DbId) -> StoreResult<bool> {
        TabItemRepo::delete(&self.pool, id).await
    }
}

impl NestedService for TabItemService {
    type ParentService = ContractItemService;

    fn parent_filter(contract_item_id: DbId) -> TabItemFilter {
        TabItemFilter {
            contract_item_id: Some(contract_item_id),
        }
    }
}
