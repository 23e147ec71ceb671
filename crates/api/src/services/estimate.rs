//! Estimates (periodic pay applications), owned by a project.

use async_trait::async_trait;
use tabsheet_core::context::{ReadContext, ReadManyContext, WriteContext};
use tabsheet_core::error::CoreResult;
use tabsheet_core::types::DbId;
use tabsheet_db::models::estimate::{CreateEstimate, Estimate, EstimateFilter, UpdateEstimate};
use tabsheet_db::models::project::Project;
use tabsheet_db::repositories::EstimateRepo;
use tabsheet_db::{DbPool, StoreResult};

use super::{NestedService, ProjectService, ScopedService};

pub struct EstimateService {
    pool: DbPool,
}

#[async_trait]
impl ScopedService for EstimateService {
    type Entity = Estimate;
    type Filter = EstimateFilter;
    type Create = CreateEstimate;
    type Update = UpdateEstimate;
    type Parent = Project;

    const UNIQUE_FIELD: Option<&'static str> = Some("estimateNumber");

    fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find(&self, id: DbId, ctx: &ReadContext<EstimateFilter>) -> StoreResult<Option<Estimate>> {
        EstimateRepo::find_scoped(&self.pool, id, ctx.user.organization_id, &ctx.filter).await
    }

    async fn find_many(&self, ctx: &ReadManyContext<EstimateFilter>) -> StoreResult<Vec<Estimate>> {
        EstimateRepo::list_scoped(
            &self.pool,
            ctx.user.organization_id,
            &ctx.filter,
            ctx.pagination.limit(),
            ctx.pagination.offset(),
        )
        .await
    }

    async fn resolve_parent(&self, ctx: &WriteContext<CreateEstimate>) -> CoreResult<Project> {
        ProjectService::new(self.pool.clone())
            .get_by_id(&ctx.resource.project_id, &ctx.read())
            .await
    }

    async fn insert(&self, ctx: &WriteContext<CreateEstimate>, project: Project) -> StoreResult<Estimate> {
        EstimateRepo::insert(&self.pool, project.id, &ctx.resource).await
    }

    fn merge(row: Estimate, patch: UpdateEstimate) -> Estimate {
        row.merge(patch)
    }

    async fn save(&self, row: &Estimate) -> StoreResult<Estimate> {
        EstimateRepo::update(&self.pool, row).await
    }

    async fn remove(&self, id: DbId) -> StoreResult<bool> {
        EstimateRepo::delete(&self.pool, id).await
    }
}

impl NestedService for EstimateService {
    type ParentService = ProjectService;

    fn parent_filter(project_id: DbId) -> EstimateFilter {
        EstimateFilter {
            project_id: Some(project_id),
        }
    }
}
