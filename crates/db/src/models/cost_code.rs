//! Cost code entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabsheet_core::schema::{FieldSpec, FieldType, Mode, Resource, ResourceSchema};
use tabsheet_core::types::{DbId, Timestamp};
use validator::Validate;

use super::ApiObject;

/// A row from the `cost_codes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCode {
    pub id: DbId,
    pub project_id: DbId,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: Timestamp,
}

impl ApiObject for CostCode {
    const OBJECT: &'static str = "cost-code";

    fn id(&self) -> DbId {
        self.id
    }
}

impl CostCode {
    pub fn merge(mut self, patch: UpdateCostCode) -> Self {
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        self
    }
}

static SCHEMA: ResourceSchema = ResourceSchema {
    kind: CostCode::OBJECT,
    fields: &[
        FieldSpec::parent("projectId"),
        FieldSpec::required("code", FieldType::String),
        FieldSpec::optional("description", FieldType::String),
    ],
};

/// DTO for creating a cost code under a project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCostCode {
    pub project_id: String,
    #[validate(length(min = 1, max = 64))]
    pub code: String,
    pub description: Option<String>,
}

impl Resource for CreateCostCode {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Create;
}

/// DTO for updating a cost code. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCostCode {
    #[validate(length(min = 1, max = 64))]
    pub code: Option<String>,
    pub description: Option<String>,
}

impl Resource for UpdateCostCode {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Update;
}

/// Extra predicate for cost code lookups (`?projectId=`).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCodeFilter {
    pub project_id: Option<DbId>,
}
