//! Projects, owned by an organization.

use async_trait::async_trait;
use tabsheet_core::context::{ReadContext, ReadManyContext, WriteContext};
use tabsheet_core::error::CoreResult;
use tabsheet_core::types::DbId;
use tabsheet_db::models::organization::Organization;
use tabsheet_db::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};
use tabsheet_db::repositories::ProjectRepo;
use tabsheet_db::{DbPool, StoreResult};

use super::{NestedService, OrganizationService, ScopedService};

pub struct ProjectService {
    pool: DbPool,
}

#[async_trait]
impl ScopedService for ProjectService {
    type Entity = Project;
    type Filter = ProjectFilter;
    type Create = CreateProject;
    type Update = UpdateProject;
    type Parent = Organization;

    const UNIQUE_FIELD: Option<&'static str> = Some("projectNumber");

    fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn find(&self, id: DbId, ctx: &ReadContext<ProjectFilter>) -> StoreResult<Option<Project>> {
        ProjectRepo::find_scoped(&self.pool, id, ctx.user.organization_id, &ctx.filter).await
    }

    async fn find_many(&self, ctx: &ReadManyContext<ProjectFilter>) -> StoreResult<Vec<Project>> {
        ProjectRepo::list_scoped(
            &self.pool,
            ctx.user.organization_id,
            &ctx.filter,
            ctx.pagination.limit(),
            ctx.pagination.offset(),
        )
        .await
    }

    async fn resolve_parent(&self, ctx: &WriteContext<CreateProject>) -> CoreResult<Organization> {
        OrganizationService::new(self.pool.clone())
            .get_by_id(&ctx.resource.organization_id, &ctx.read())
            .await
    }

    async fn insert(
        &self,
        ctx: &WriteContext<CreateProject>,
        organization: Organization,
    ) -> StoreResult<Project> {
        ProjectRepo::insert(&self.pool, organization.id, &ctx.resource).await
    }

    fn merge(row: Project, patch: UpdateProject) -> Project {
        row.merge(patch)
    }

    async fn save(&self, row: &Project) -> StoreResult<Project> {
        ProjectRepo::update(&self.pool, row).await
    }

    async fn remove(&self, id: DbId) -> StoreResult<bool> {
        ProjectRepo::delete(&self.pool, id).await
    }
}

impl NestedService for ProjectService {
    type ParentService = OrganizationService;

    fn parent_filter(organization_id: DbId) -> ProjectFilter {
        ProjectFilter {
            organization_id: Some(organization_id),
        }
    }
}
