//! Repository for the `tab_items` table.

use sqlx::PgPool;
use tabsheet_core::types::{new_id, DbId};

use crate::error::StoreResult;
use crate::models::tab_item::{CreateTabItem, TabItem, TabItemFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "t.id, t.contract_item_id, t.tab_set, t.quantity, t.remarks, t.street, \
                       t.side, t.begin_station, t.end_station, t.created_at, t.updated_at";

/// Ownership join: tab item -> contract item -> project -> organization.
const SCOPE: &str = "tab_items t
                     JOIN contract_items ci ON ci.id = t.contract_item_id
                     JOIN projects p ON p.id = ci.project_id";

/// Provides CRUD operations for tab items.
pub struct TabItemRepo;

impl TabItemRepo {
    /// Insert a new tab item under `contract_item_id`, returning the created row.
    pub async fn insert(
        pool: &PgPool,
        contract_item_id: DbId,
        input: &CreateTabItem,
    ) -> StoreResult<TabItem> {
        let query = format!(
            "INSERT INTO tab_items AS t
                (id, contract_item_id, tab_set, quantity, remarks, street, side,
                 begin_station, end_station)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TabItem>(&query)
            .bind(new_id())
            .bind(contract_item_id)
            .bind(&input.tab_set)
            .bind(input.quantity)
            .bind(&input.remarks)
            .bind(&input.street)
            .bind(&input.side)
            .bind(input.begin_station)
            .bind(input.end_station)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find a tab item by id within the caller's organization.
    pub async fn find_scoped(
        pool: &PgPool,
        id: DbId,
        organization_id: Option<DbId>,
        filter: &TabItemFilter,
    ) -> StoreResult<Option<TabItem>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {SCOPE}
             WHERE t.id = $1
               AND p.organization_id = $2
               AND ($3::uuid IS NULL OR t.contract_item_id = $3)"
        );
        let row = sqlx::query_as::<_, TabItem>(&query)
            .bind(id)
            .bind(organization_id)
            .bind(filter.contract_item_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// List tab items visible to the caller, oldest first.
    pub async fn list_scoped(
        pool: &PgPool,
        organization_id: Option<DbId>,
        filter: &TabItemFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<TabItem>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {SCOPE}
             WHERE p.organization_id = $1
               AND ($2::uuid IS NULL OR t.contract_item_id = $2)
             ORDER BY t.created_at ASC, t.id ASC
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, TabItem>(&query)
            .bind(organization_id)
            .bind(filter.contract_item_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Persist a merged row and stamp `updated_at`.
    pub async fn update(pool: &PgPool, row: &TabItem) -> StoreResult<TabItem> {
        let query = format!(
            "UPDATE tab_items AS t SET
                tab_set = $2,
                quantity = $3,
                remarks = $4,
                street = $5,
                side = $6,
                begin_station = $7,
                end_station = $8,
                updated_at = NOW()
             WHERE t.id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TabItem>(&query)
            .bind(row.id)
            .bind(&row.tab_set)
            .bind(row.quantity)
            .bind(&row.remarks)
            .bind(&row.street)
            .bind(&row.side)
            .bind(row.begin_station)
            .bind(row.end_station)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Permanently delete a tab item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM tab_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
