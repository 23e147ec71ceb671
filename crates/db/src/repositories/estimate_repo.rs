//! Repository for the `estimates` table.

use sqlx::PgPool;
use tabsheet_core::types::{new_id, DbId};

use crate::error::StoreResult;
use crate::models::estimate::{CreateEstimate, Estimate, EstimateFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "e.id, e.project_id, e.estimate_number, e.period_ending, e.created_at, e.updated_at";

/// Ownership join: estimate -> project -> organization.
const SCOPE: &str = "estimates e JOIN projects p ON p.id = e.project_id";

/// Provides CRUD operations for estimates.
pub struct EstimateRepo;

impl EstimateRepo {
    /// Insert a new estimate under `project_id`, returning the created row.
    pub async fn insert(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateEstimate,
    ) -> StoreResult<Estimate> {
        let query = format!(
            "INSERT INTO estimates AS e (id, project_id, estimate_number, period_ending)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Estimate>(&query)
            .bind(new_id())
            .bind(project_id)
            .bind(&input.estimate_number)
            .bind(input.period_ending)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find an estimate by id within the caller's organization.
    pub async fn find_scoped(
        pool: &PgPool,
        id: DbId,
        organization_id: Option<DbId>,
        filter: &EstimateFilter,
    ) -> StoreResult<Option<Estimate>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {SCOPE}
             WHERE e.id = $1
               AND p.organization_id = $2
               AND ($3::uuid IS NULL OR e.project_id = $3)"
        );
        let row = sqlx::query_as::<_, Estimate>(&query)
            .bind(id)
            .bind(organization_id)
            .bind(filter.project_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// List estimates visible to the caller, oldest first.
    pub async fn list_scoped(
        pool: &PgPool,
        organization_id: Option<DbId>,
        filter: &EstimateFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Estimate>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {SCOPE}
             WHERE p.organization_id = $1
               AND ($2::uuid IS NULL OR e.project_id = $2)
             ORDER BY e.created_at ASC, e.id ASC
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, Estimate>(&query)
            .bind(organization_id)
            .bind(filter.project_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Persist a merged row and stamp `updated_at`.
    pub async fn update(pool: &PgPool, row: &Estimate) -> StoreResult<Estimate> {
        let query = format!(
            "UPDATE estimates AS e SET
                estimate_number = $2,
                period_ending = $3,
                updated_at = NOW()
             WHERE e.id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Estimate>(&query)
            .bind(row.id)
            .bind(&row.estimate_number)
            .bind(row.period_ending)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Permanently delete an estimate. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM estimates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
