//! Cost codes, owned by a project.

use async_trait::async_trait;
use tabsheet_core::context::{ReadContext, ReadManyContext, WriteContext};
use tabsheet_core::error::CoreResult;
use tabsheet_core::types::DbId;
use tabsheet_db::models::cost_code::{CostCode, CostCodeFilter, CreateCostCode, UpdateCostCode};
use tabsheet_db::models::project::Project;
use tabsheet_db::repositories::CostCodeRepo;
use tabsheet_db::{DbPool, StoreResult};

use super::{NestedService, ProjectService, ScopedService};

pub struct CostCodeService {
    pool: DbPool,
}

#[async_trait]
impl ScopedService for CostCodeService {
    type Entity = CostCode;
    type Filter = CostCodeFilter;
    type Create = CreateCostCode;
    type Update = UpdateCostCode;
    type Parent = Project;

    const UNIQUE_FIELD: Option<&'static str> = Some("code");

    fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find(&self, id: DbId, ctx: &ReadContext<CostCodeFilter>) -> StoreResult<Option<CostCode>> {
        CostCodeRepo::find_scoped(&self.pool, id, ctx.user.organization_id, &ctx.filter).await
    }

    async fn find_many(&self, ctx: &ReadManyContext<CostCodeFilter>) -> StoreResult<Vec<CostCode>> {
        CostCodeRepo::list_scoped(
            &self.pool,
            ctx.user.organization_id,
            &ctx.filter,
            ctx.pagination.limit(),
            ctx.pagination.offset(),
        )
        .await
    }

    async fn resolve_parent(&self, ctx: &WriteContext<CreateCostCode>) -> CoreResult<Project> {
        ProjectService::new(self.pool.clone())
            .get_by_id(&ctx.resource.project_id, &ctx.read())
            .await
    }

    async fn insert(&self, ctx: &WriteContext<CreateCostCode>, project: Project) -> StoreResult<CostCode> {
        CostCodeRepo::insert(&self.pool, project.id, &ctx.resource).await
    }

    fn merge(row: CostCode, patch: UpdateCostCode) -> CostCode {
        row.merge(patch)
    }

    async fn save(&self, row: &CostCode) -> StoreResult<CostCode> {
        CostCodeRepo::update(&self.pool, row).await
    }

    async fn remove(&self, id: DbId) -> StoreResult<bool> {
        CostCodeRepo::delete(&self.pool, id).await
    }
}

impl NestedService for CostCodeService {
    type ParentService = ProjectService;

    fn parent_filter(project_id: DbId) -> CostCodeFilter {
        CostCodeFilter {
            project_id: Some(project_id),
        }
    }
}
