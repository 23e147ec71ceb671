//! Estimate items: the billed quantity of one contract item on one estimate.
//!
//! An estimate item has two references. The estimate is its owner; the
//! contract item must belong to the same project as the estimate, so it is
//! resolved with the estimate's project as an extra filter.

use async_trait::async_trait;
use tabsheet_core::context::{ReadContext, ReadManyContext, WriteContext};
use tabsheet_core::error::CoreResult;
use tabsheet_core::types::DbId;
use tabsheet_db::models::contract_item::{ContractItem, ContractItemFilter};
use tabsheet_db::models::estimate::Estimate;
use tabsheet_db::models::estimate_item::{
    CreateEstimateItem, EstimateItem, EstimateItemFilter, UpdateEstimateItem,
};
use tabsheet_db::repositories::EstimateItemRepo;
use tabsheet_db::{DbPool, StoreResult};

use super::{ContractItemService, EstimateService, NestedService, ScopedService};

/// Both resolved references of a new estimate item.
#[derive(Debug)]
pub struct EstimateItemParents {
    pub estimate: Estimate,
    pub contract_item: ContractItem,
}

pub struct EstimateItemService {
    pool: DbPool,
}

#[async_trait]
impl ScopedService for EstimateItemService {
    type Entity = EstimateItem;
    type Filter = EstimateItemFilter;
    type Create = CreateEstimateItem;
    type Update = UpdateEstimateItem;
    type Parent = EstimateItemParents;

    const UNIQUE_FIELD: Option<&'static str> = Some("contractItemId");

    fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find(
        &self,
        id: DbId,
        ctx: &ReadContext<EstimateItemFilter>,
    ) -> StoreResult<Option<EstimateItem>> {
        EstimateItemRepo::find_scoped(&self.pool, id, ctx.user.organization_id, &ctx.filter).await
    }

    async fn find_many(
        &self,
        ctx: &ReadManyContext<EstimateItemFilter>,
    ) -> StoreResult<Vec<EstimateItem>> {
        EstimateItemRepo::list_scoped(
            &self.pool,
            ctx.user.organization_id,
            &ctx.filter,
            ctx.pagination.limit(),
            ctx.pagination.offset(),
        )
        .await
    }

    async fn resolve_parent(
        &self,
        ctx: &WriteContext<CreateEstimateItem>,
    ) -> CoreResult<EstimateItemParents> {
        let estimate = EstimateService::new(self.pool.clone())
            .get_by_id(&ctx.resource.estimate_id, &ctx.read())
            .await?;

        let same_project = ReadContext::with_filter(
            ctx.user.clone(),
            ContractItemFilter {
                project_id: Some(estimate.project_id),
            },
        );
        let contract_item = ContractItemService::new(self.pool.clone())
            .get_by_id(&ctx.resource.contract_item_id, &same_project)
            .await?;

        Ok(EstimateItemParents {
            estimate,
            contract_item,
        })
    }

    async fn insert(
        &self,
        ctx: &WriteContext<CreateEstimateItem>,
        parents: EstimateItemParents,
    ) -> StoreResult<EstimateItem> {
        EstimateItemRepo::insert(
            &self.pool,
            parents.estimate.id,
            parents.contract_item.id,
            ctx.resource.quantity,
        )
        .await
    }

    fn merge(row: EstimateItem, patch: UpdateEstimateItem) -> EstimateItem {
        row.merge(patch)
    }

    async fn save(&self, row: &EstimateItem) -> StoreResult<EstimateItem> {
        EstimateItemRepo::update(&self.pool, row).await
    }

    async fn remove(&self, id: DbId) -> StoreResult<bool> {
        EstimateItemRepo::delete(&self.pool, id).await
    }
}

impl NestedService for EstimateItemService {
    type ParentService = EstimateService;

    fn parent_filter(estimate_id: DbId) -> EstimateItemFilter {
        EstimateItemFilter {
            estimate_id: Some(estimate_id),
        }
    }
}
