//! Repository for the `estimate_items` table.

use sqlx::PgPool;
use tabsheet_core::types::{new_id, DbId};

use crate::error::StoreResult;
use crate::models::estimate_item::{EstimateItem, EstimateItemFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "ei.id, ei.estimate_id, ei.contract_item_id, ei.quantity, ei.created_at, ei.updated_at";

/// Ownership join: estimate item -> estimate -> project -> organization.
const SCOPE: &str = "estimate_items ei
                     JOIN estimates e ON e.id = ei.estimate_id
                     JOIN projects p ON p.id = e.project_id";

/// Provides CRUD operations for estimate items.
pub struct EstimateItemRepo;

impl EstimateItemRepo {
    /// Insert a new estimate item, returning the created row.
    ///
    /// Both references must already have been resolved through the caller's
    /// scope.
    pub async fn insert(
        pool: &PgPool,
        estimate_id: DbId,
        contract_item_id: DbId,
        quantity: f64,
    ) -> StoreResult<EstimateItem> {
        let query = format!(
            "INSERT INTO estimate_items AS ei (id, estimate_id, contract_item_id, quantity)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, EstimateItem>(&query)
            .bind(new_id())
            .bind(estimate_id)
            .bind(contract_item_id)
            .bind(quantity)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find an estimate item by id within the caller's organization.
    pub async fn find_scoped(
        pool: &PgPool,
        id: DbId,
        organization_id: Option<DbId>,
        filter: &EstimateItemFilter,
    ) -> StoreResult<Option<EstimateItem>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {SCOPE}
             WHERE ei.id = $1
               AND p.organization_id = $2
               AND ($3::uuid IS NULL OR ei.estimate_id = $3)"
        );
        let row = sqlx::query_as::<_, EstimateItem>(&query)
            .bind(id)
            .bind(organization_id)
            .bind(filter.estimate_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// List estimate items visible to the caller, oldest first.
    pub async fn list_scoped(
        pool: &PgPool,
        organization_id: Option<DbId>,
        filter: &EstimateItemFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<EstimateItem>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {SCOPE}
             WHERE p.organization_id = $1
               AND ($2::uuid IS NULL OR ei.estimate_id = $2)
             ORDER BY ei.created_at ASC, ei.id ASC
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, EstimateItem>(&query)
            .bind(organization_id)
            .bind(filter.estimate_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Persist a merged row and stamp `updated_at`. Only the quantity is
    /// mutable.
    pub async fn update(pool: &PgPool, row: &EstimateItem) -> StoreResult<EstimateItem> {
        let query = format!(
            "UPDATE estimate_items AS ei SET
                quantity = $2,
                updated_at = NOW()
             WHERE ei.id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, EstimateItem>(&query)
            .bind(row.id)
            .bind(row.quantity)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Permanently delete an estimate item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM estimate_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
