//! Repository for the `projects` table.

use sqlx::PgPool;
use tabsheet_core::types::{new_id, DbId};

use crate::error::StoreResult;
use crate::models::project::{CreateProject, Project, ProjectFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "p.id, p.organization_id, p.name, p.project_number, p.description, \
                       p.client, p.active, p.created_at, p.updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `organization_id`, returning the created row.
    ///
    /// If `active` is `None` in the input, defaults to `true`.
    pub async fn insert(
        pool: &PgPool,
        organization_id: DbId,
        input: &CreateProject,
    ) -> StoreResult<Project> {
        let query = format!(
            "INSERT INTO projects AS p
                (id, organization_id, name, project_number, description, client, active)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, TRUE))
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Project>(&query)
            .bind(new_id())
            .bind(organization_id)
            .bind(&input.name)
            .bind(&input.project_number)
            .bind(&input.description)
            .bind(&input.client)
            .bind(input.active)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Find a project by id within the caller's organization.
    pub async fn find_scoped(
        pool: &PgPool,
        id: DbId,
        organization_id: Option<DbId>,
        filter: &ProjectFilter,
    ) -> StoreResult<Option<Project>> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects p
             WHERE p.id = $1
               AND p.organization_id = $2
               AND ($3::uuid IS NULL OR p.organization_id = $3)"
        );
        let row = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(organization_id)
            .bind(filter.organization_id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// List the caller's projects, oldest first.
    pub async fn list_scoped(
        pool: &PgPool,
        organization_id: Option<DbId>,
        filter: &ProjectFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Vec<Project>> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects p
             WHERE p.organization_id = $1
               AND ($2::uuid IS NULL OR p.organization_id = $2)
             ORDER BY p.created_at ASC, p.id ASC
             LIMIT $3 OFFSET $4"
        );
        let rows = sqlx::query_as::<_, Project>(&query)
            .bind(organization_id)
            .bind(filter.organization_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Persist a merged row and stamp `updated_at`. The owning organization
    /// is never rewritten.
    pub async fn update(pool: &PgPool, row: &Project) -> StoreResult<Project> {
        let query = format!(
            "UPDATE projects AS p SET
                name = $2,
                project_number = $3,
                description = $4,
                client = $5,
                active = $6,
                updated_at = NOW()
             WHERE p.id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Project>(&query)
            .bind(row.id)
            .bind(&row.name)
            .bind(&row.project_number)
            .bind(&row.description)
            .bind(&row.client)
            .bind(row.active)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Permanently delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
