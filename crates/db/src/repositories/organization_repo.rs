//! Repository for the `organizations` table.

use sqlx::PgPool;
use tabsheet_core::types::{new_id, DbId};

use crate::error::StoreResult;
use crate::models::organization::{CreateOrganization, Organization};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "o.id, o.name, o.created_at, o.updated_at";

/// Provides CRUD operations for organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Insert a new organization, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateOrganization) -> StoreResult<Organization> {
        let query = format!(
            "INSERT INTO organizations AS o (id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Organization>(&query)
            .bind(new_id())
            .bind(&input.name)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find an organization by id, visible only to its own members.
    pub async fn find_scoped(
        pool: &PgPool,
        id: DbId,
        organization_id: Option<DbId>,
    ) -> StoreResult<Option<Organization>> {
        let query = format!("SELECT {COLUMNS} FROM organizations o WHERE o.id = $1 AND o.id = $2");
        let row = sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .bind(organization_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// List the organizations visible to the caller (at most their own).
    pub async fn list_scoped(
        pool: &PgPool,
        organization_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Organization>> {
        let query = format!(
            "SELECT {COLUMNS} FROM organizations o
             WHERE o.id = $1
             ORDER BY o.created_at ASC, o.id ASC
             LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, Organization>(&query)
            .bind(organization_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Persist a merged row and stamp `updated_at`.
    pub async fn update(pool: &PgPool, row: &Organization) -> StoreResult<Organization> {
        let query = format!(
            "UPDATE organizations AS o SET
                name = $2,
                updated_at = NOW()
             WHERE o.id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Organization>(&query)
            .bind(row.id)
            .bind(&row.name)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Permanently delete an organization and, by cascade, everything it owns.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
