//! Scoped resource services.
//!
//! Every entity gets the same six operations through [`ScopedService`]. An
//! implementation only supplies the store hooks (`find`, `find_many`,
//! `insert`, `save`, `remove`), the merge of a patch into a row, and how to
//! resolve the parent a create hangs off. Ownership scoping, not-found
//! handling and store error mapping live in the provided methods, so they
//! behave identically for every entity.

pub mod contract_item;
pub mod cost_code;
pub mod estimate;
pub mod estimate_item;
pub mod organization;
pub mod project;
pub mod tab_item;

pub use contract_item::ContractItemService;
pub use cost_code::CostCodeService;
pub use estimate::EstimateService;
pub use estimate_item::EstimateItemService;
pub use organization::OrganizationService;
pub use project::ProjectService;
pub use tab_item::TabItemService;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tabsheet_core::context::{ReadContext, ReadManyContext, WriteContext};
use tabsheet_core::error::{CoreError, CoreResult};
use tabsheet_core::schema::Resource;
use tabsheet_core::types::{parse_id, DbId};
use tabsheet_db::models::ApiObject;
use tabsheet_db::{DbPool, StoreError, StoreResult};

#[async_trait]
pub trait ScopedService: Send + Sync + Sized + 'static {
    type Entity: ApiObject + Send + Sync + 'static;
    /// Entity-specific predicate ANDed into the ownership filter.
    type Filter: DeserializeOwned + Default + Clone + Send + Sync + 'static;
    type Create: Resource + Send + Sync + 'static;
    type Update: Resource + Send + Sync + 'static;
    /// Whatever [`ScopedService::resolve_parent`] yields for `insert`.
    type Parent: Send + Sync;

    /// Body field reported when an insert or update hits the entity's
    /// parent-scoped unique constraint.
    const UNIQUE_FIELD: Option<&'static str>;

    fn new(pool: DbPool) -> Self;

    async fn find(
        &self,
        id: DbId,
        ctx: &ReadContext<Self::Filter>,
    ) -> StoreResult<Option<Self::Entity>>;

    async fn find_many(&self, ctx: &ReadManyContext<Self::Filter>)
        -> StoreResult<Vec<Self::Entity>>;

    /// Resolve the parent referenced by the body through the parent's own
    /// scoped lookup.
    async fn resolve_parent(&self, ctx: &WriteContext<Self::Create>) -> CoreResult<Self::Parent>;

    async fn insert(
        &self,
        ctx: &WriteContext<Self::Create>,
        parent: Self::Parent,
    ) -> StoreResult<Self::Entity>;

    fn merge(row: Self::Entity, patch: Self::Update) -> Self::Entity;

    async fn save(&self, row: &Self::Entity) -> StoreResult<Self::Entity>;

    async fn remove(&self, id: DbId) -> StoreResult<bool>;

    /// Fetch one row visible to the caller. Malformed ids, missing rows and
    /// rows owned by another organization all come back as the same
    /// `NotFound`.
    async fn get_by_id(&self, id: &str, ctx: &ReadContext<Self::Filter>) -> CoreResult<Self::Entity> {
        let not_found = || CoreError::not_found(Self::Entity::OBJECT, id);
        let parsed = parse_id(id).ok_or_else(not_found)?;
        self.find(parsed, ctx)
            .await
            .map_err(store_error::<Self>)?
            .ok_or_else(not_found)
    }

    async fn list(&self, ctx: &ReadManyContext<Self::Filter>) -> CoreResult<Vec<Self::Entity>> {
        self.find_many(ctx).await.map_err(store_error::<Self>)
    }

    /// Persist a new row under an already resolved parent.
    async fn create(
        &self,
        ctx: WriteContext<Self::Create>,
        parent: Self::Parent,
    ) -> CoreResult<Self::Entity> {
        let row = self
            .insert(&ctx, parent)
            .await
            .map_err(store_error::<Self>)?;
        tracing::info!(
            object = Self::Entity::OBJECT,
            id = %row.id(),
            user_id = %ctx.user.user_id,
            "Resource created"
        );
        Ok(row)
    }

    async fn create_by_parent_id(&self, ctx: WriteContext<Self::Create>) -> CoreResult<Self::Entity> {
        let parent = self.resolve_parent(&ctx).await?;
        self.create(ctx, parent).await
    }

    async fn update(&self, id: &str, ctx: WriteContext<Self::Update>) -> CoreResult<Self::Entity> {
        let existing = self.get_by_id(id, &ctx.read()).await?;
        let merged = Self::merge(existing, ctx.resource);
        let row = self.save(&merged).await.map_err(store_error::<Self>)?;
        tracing::info!(
            object = Self::Entity::OBJECT,
            id = %row.id(),
            user_id = %ctx.user.user_id,
            "Resource updated"
        );
        Ok(row)
    }

    async fn delete(&self, id: &str, ctx: &ReadContext<Self::Filter>) -> CoreResult<()> {
        let existing = self.get_by_id(id, ctx).await?;
        let removed = self
            .remove(existing.id())
            .await
            .map_err(store_error::<Self>)?;
        if !removed {
            return Err(CoreError::Internal(format!(
                "{} {} vanished before it could be deleted",
                Self::Entity::OBJECT,
                existing.id()
            )));
        }
        tracing::info!(
            object = Self::Entity::OBJECT,
            id = %existing.id(),
            user_id = %ctx.user.user_id,
            "Resource deleted"
        );
        Ok(())
    }
}

/// A service whose rows can also be reached through their parent's URL
/// (`/projects/{id}/contract-items`, ...).
pub trait NestedService: ScopedService {
    type ParentService: ScopedService;

    /// Filter selecting the children of `parent_id`.
    fn parent_filter(parent_id: DbId) -> Self::Filter;
}

/// Map a store failure onto the domain taxonomy: a unique violation is the
/// caller's fault, anything else is ours.
pub fn store_error<S: ScopedService>(err: StoreError) -> CoreError {
    match (err, S::UNIQUE_FIELD) {
        (StoreError::Duplicate { .. }, Some(field)) => {
            CoreError::duplicate(S::Entity::OBJECT, field)
        }
        (StoreError::Duplicate { constraint }, None) => CoreError::Internal(format!(
            "unexpected unique violation on {constraint} for {}",
            S::Entity::OBJECT
        )),
        (StoreError::Unknown(err), _) => CoreError::Internal(err.to_string()),
    }
}
