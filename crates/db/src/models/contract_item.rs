//! Contract item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabsheet_core::schema::{FieldSpec, FieldType, Mode, Resource, ResourceSchema};
use tabsheet_core::types::{DbId, Timestamp};
use validator::Validate;

use super::ApiObject;

/// A row from the `contract_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractItem {
    pub id: DbId,
    pub project_id: DbId,
    pub item_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: f64,
    pub unit: String,
    /// Whole cents.
    pub unit_price: i64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: Timestamp,
}

impl ApiObject for ContractItem {
    const OBJECT: &'static str = "contract-item";

    fn id(&self) -> DbId {
        self.id
    }
}

impl ContractItem {
    pub fn merge(mut self, patch: UpdateContractItem) -> Self {
        if let Some(item_number) = patch.item_number {
            self.item_number = item_number;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
        self
    }
}

static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ContractItem::OBJECT,
    fields: &[
        FieldSpec::parent("projectId"),
        FieldSpec::required("itemNumber", FieldType::String),
        FieldSpec::optional("description", FieldType::String),
        FieldSpec::required("quantity", FieldType::Number),
        FieldSpec::required("unit", FieldType::String),
        FieldSpec::required("unitPrice", FieldType::Integer),
    ],
};

/// DTO for creating a contract item under a project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractItem {
    pub project_id: String,
    #[validate(length(min = 1, max = 64))]
    pub item_number: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(length(min = 1, max = 16))]
    pub unit: String,
    /// Cents.
    #[validate(range(min = 0))]
    pub unit_price: i64,
}

impl Resource for CreateContractItem {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Create;
}

/// DTO for updating a contract item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContractItem {
    #[validate(length(min = 1, max = 64))]
    pub item_number: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub quantity: Option<f64>,
    #[validate(length(min = 1, max = 16))]
    pub unit: Option<String>,
    #[validate(range(min = 0))]
    pub unit_price: Option<i64>,
}

impl Resource for UpdateContractItem {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Update;
}

/// Extra predicate for contract item lookups (`?projectId=`).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractItemFilter {
    pub project_id: Option<DbId>,
}
