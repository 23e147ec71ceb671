//! Estimate item entity model and DTOs.
//!
//! An estimate item records the quantity of one contract item billed on one
//! estimate. The contract item must belong to the estimate's project.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabsheet_core::schema::{FieldSpec, FieldType, Mode, Resource, ResourceSchema};
use tabsheet_core::types::{DbId, Timestamp};
use validator::Validate;

use super::ApiObject;

/// A row from the `estimate_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateItem {
    pub id: DbId,
    pub estimate_id: DbId,
    pub contract_item_id: DbId,
    pub quantity: f64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: Timestamp,
}

impl ApiObject for EstimateItem {
    const OBJECT: &'static str = "estimate-item";

    fn id(&self) -> DbId {
        self.id
    }
}

impl EstimateItem {
    pub fn merge(mut self, patch: UpdateEstimateItem) -> Self {
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        self
    }
}

static CREATE_SCHEMA: ResourceSchema = ResourceSchema {
    kind: EstimateItem::OBJECT,
    fields: &[
        FieldSpec::parent("estimateId"),
        FieldSpec::required("contractItemId", FieldType::String),
        FieldSpec::required("quantity", FieldType::Number),
    ],
};

/// The contract item reference is fixed once created.
static UPDATE_SCHEMA: ResourceSchema = ResourceSchema {
    kind: EstimateItem::OBJECT,
    fields: &[
        FieldSpec::parent("estimateId"),
        FieldSpec::parent("contractItemId"),
        FieldSpec::required("quantity", FieldType::Number),
    ],
};

/// DTO for creating an estimate item under an estimate.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEstimateItem {
    pub estimate_id: String,
    pub contract_item_id: String,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
}

impl Resource for CreateEstimateItem {
    const SCHEMA: &'static ResourceSchema = &CREATE_SCHEMA;
    const MODE: Mode = Mode::Create;
}

/// DTO for updating an estimate item. Only the quantity is mutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEstimateItem {
    #[validate(range(min = 0.0))]
    pub quantity: Option<f64>,
}

impl Resource for UpdateEstimateItem {
    const SCHEMA: &'static ResourceSchema = &UPDATE_SCHEMA;
    const MODE: Mode = Mode::Update;
}

/// Extra predicate for estimate item lookups (`?estimateId=`).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateItemFilter {
    pub estimate_id: Option<DbId>,
}
