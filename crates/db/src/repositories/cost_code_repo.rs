//! Repository for the `cost_codes` table.

use sqlx::PgPool;
use tabsheet_core::types::{new_id, DbId};

use crate::error::StoreResult;
use crate::models::cost_code::{CostCode, CostCodeFilter, CreateCostCode};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "cc.id, cc.project_id, cc.code, cc.description, cc.created_at, cc.updated_at";

/// Ownership join: cost code -> project -> organization.
const SCOPE: &str = "cost_codes cc JOIN projects p ON p.id = cc.project_id";

/// Provides CRUD operations for cost codes.
pub struct CostCodeRepo;

impl CostCodeRepo {
    /// Insert a new cost code under `project_id`, returning the created row.
    pub async fn insert(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateCostCode,
    ) -> StoreResult<CostCode> {
        let query = format!(
            "INSERT INTO cost_codes AS cc (id, project_id, code, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CostCode>(&query)
            .bind(new_id())
            .bind(project_id)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find a cost code by id within the caller's organization.
    pub async fn find_scoped(
        pool: &PgPool,
        id: DbId,
        organization_id: Option<DbId>,
        filter: &CostCodeFilter,
    ) -> StoreResult<Option<CostCode>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {SCOPE}
             WHERE cc.id = $1
               AND p.organization_id = $2
               AND ($3::uuid IS NULL OR cc.project_id = $3)"
        );
        let row = sqlx::query_as::<_, CostCode>(&query)
            .bind(id)
            .bind(organization_id)
            .bind(filter.project_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// List cost codes visible to the caller, ordered by code.
    pub async fn list_scoped(
        pool: &PgPool,
        organization_id: Option<DbId>,
        filter: &CostCodeFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<CostCode>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {SCOPE}
             WHERE p.organization_id = $1
               AND ($2::uuid IS NULL OR cc.project_id = $2)
             ORDER BY cc.code ASC, cc.id ASC
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, CostCode>(&query)
            .bind(organization_id)
            .bind(filter.project_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Persist a merged row and stamp `updated_at`.
    pub async fn update(pool: &PgPool, row: &CostCode) -> StoreResult<CostCode> {
        let query = format!(
            "UPDATE cost_codes AS cc SET
                code = $2,
                description = $3,
                updated_at = NOW()
             WHERE cc.id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CostCode>(&query)
            .bind(row.id)
            .bind(&row.code)
            .bind(&row.description)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Permanently delete a cost code. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM cost_codes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
