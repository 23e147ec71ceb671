//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabsheet_core::schema::{FieldSpec, FieldType, Mode, Resource, ResourceSchema};
use tabsheet_core::types::{DbId, Timestamp};
use validator::Validate;

use super::ApiObject;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    /// Never exposed: the caller's organization is implied by the token.
    #[serde(skip_serializing)]
    pub organization_id: DbId,
    pub name: String,
    pub project_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    pub active: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: Timestamp,
}

impl ApiObject for Project {
    const OBJECT: &'static str = "project";

    fn id(&self) -> DbId {
        self.id
    }
}

impl Project {
    /// Apply the fields present in `patch`. The owning organization is
    /// immutable.
    pub fn merge(mut self, patch: UpdateProject) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(project_number) = patch.project_number {
            self.project_number = project_number;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(client) = patch.client {
            self.client = Some(client);
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        self
    }
}

static SCHEMA: ResourceSchema = ResourceSchema {
    kind: Project::OBJECT,
    fields: &[
        FieldSpec::parent("organizationId"),
        FieldSpec::required("name", FieldType::String),
        FieldSpec::required("projectNumber", FieldType::String),
        FieldSpec::optional("description", FieldType::String),
        FieldSpec::optional("client", FieldType::String),
        FieldSpec::optional("active", FieldType::Boolean),
    ],
};

/// DTO for creating a new project.
///
/// `organization_id` is the raw client value; it is resolved through the
/// caller's scope before anything is written.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub organization_id: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub project_number: String,
    pub description: Option<String>,
    pub client: Option<String>,
    /// Defaults to `true` if omitted.
    pub active: Option<bool>,
}

impl Resource for CreateProject {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Create;
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub project_number: Option<String>,
    pub description: Option<String>,
    pub client: Option<String>,
    pub active: Option<bool>,
}

impl Resource for UpdateProject {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Update;
}

/// Extra predicate for project lookups (`?organizationId=`).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilter {
    pub organization_id: Option<DbId>,
}
