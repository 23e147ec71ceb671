//! Repository for the `contract_items` table.

use sqlx::PgPool;
use tabsheet_core::types::{new_id, DbId};

use crate::error::StoreResult;
use crate::models::contract_item::{ContractItem, ContractItemFilter, CreateContractItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "ci.id, ci.project_id, ci.item_number, ci.description, ci.quantity, \
                       ci.unit, ci.unit_price, ci.created_at, ci.updated_at";

/// Ownership join: contract item -> project -> organization.
const SCOPE: &str = "contract_items ci JOIN projects p ON p.id = ci.project_id";

/// Provides CRUD operations for contract items.
pub struct ContractItemRepo;

impl ContractItemRepo {
    /// Insert a new contract item under `project_id`, returning the created row.
    pub async fn insert(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateContractItem,
    ) -> StoreResult<ContractItem> {
        let query = format!(
            "INSERT INTO contract_items AS ci
                (id, project_id, item_number, description, quantity, unit, unit_price)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContractItem>(&query)
            .bind(new_id())
            .bind(project_id)
            .bind(&input.item_number)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(&input.unit)
            .bind(input.unit_price)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find a contract item by id within the caller's organization.
    pub async fn find_scoped(
        pool: &PgPool,
        id: DbId,
        organization_id: Option<DbId>,
        filter: &ContractItemFilter,
    ) -> StoreResult<Option<ContractItem>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {SCOPE}
             WHERE ci.id = $1
               AND p.organization_id = $2
               AND ($3::uuid IS NULL OR ci.project_id = $3)"
        );
        let row = sqlx::query_as::<_, ContractItem>(&query)
            .bind(id)
            .bind(organization_id)
            .bind(filter.project_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// List contract items visible to the caller, oldest first.
    pub async fn list_scoped(
        pool: &PgPool,
        organization_id: Option<DbId>,
        filter: &ContractItemFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<ContractItem>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {SCOPE}
             WHERE p.organization_id = $1
               AND ($2::uuid IS NULL OR ci.project_id = $2)
             ORDER BY ci.created_at ASC, ci.id ASC
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, ContractItem>(&query)
            .bind(organization_id)
            .bind(filter.project_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Persist a merged row and stamp `updated_at`.
    pub async fn update(pool: &PgPool, row: &ContractItem) -> StoreResult<ContractItem> {
        let query = format!(
            "UPDATE contract_items AS ci SET
                item_number = $2,
                description = $3,
                quantity = $4,
                unit = $5,
                unit_price = $6,
                updated_at = NOW()
             WHERE ci.id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContractItem>(&query)
            .bind(row.id)
            .bind(&row.item_number)
            .bind(&row.description)
            .bind(row.quantity)
            .bind(&row.unit)
            .bind(row.unit_price)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Permanently delete a contract item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM contract_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
