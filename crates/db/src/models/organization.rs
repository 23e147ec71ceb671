//! Organization entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabsheet_core::schema::{FieldSpec, FieldType, Mode, Resource, ResourceSchema};
use tabsheet_core::types::{DbId, Timestamp};
use validator::Validate;

use super::ApiObject;

/// A row from the `organizations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: Timestamp,
}

impl ApiObject for Organization {
    const OBJECT: &'static str = "organization";

    fn id(&self) -> DbId {
        self.id
    }
}

impl Organization {
    pub fn merge(mut self, patch: UpdateOrganization) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self
    }
}

/// Body schema shared by create and update.
static SCHEMA: ResourceSchema = ResourceSchema {
    kind: Organization::OBJECT,
    fields: &[FieldSpec::required("name", FieldType::String)],
};

/// DTO for creating a new organization.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganization {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

impl Resource for CreateOrganization {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Create;
}

/// DTO for updating an organization. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganization {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}

impl Resource for UpdateOrganization {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Update;
}

/// Organizations have no parent, so there is nothing to narrow by.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct OrganizationFilter {}
