//! Tab item entity model and DTOs.
//!
//! A tab item is one measured line (a "tab") recorded against a contract
//! item: where it was installed and how much.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabsheet_core::schema::{FieldSpec, FieldType, Mode, Resource, ResourceSchema};
use tabsheet_core::types::{DbId, Timestamp};
use validator::Validate;

use super::ApiObject;

/// A row from the `tab_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItem {
    pub id: DbId,
    pub contract_item_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_set: Option<String>,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_station: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_station: Option<i64>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: Timestamp,
}

impl ApiObject for TabItem {
    const OBJECT: &'static str = "tab-item";

    fn id(&self) -> DbId {
        self.id
    }
}

impl TabItem {
    pub fn merge(mut self, patch: UpdateTabItem) -> Self {
        if let Some(tab_set) = patch.tab_set {
            self.tab_set = Some(tab_set);
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(remarks) = patch.remarks {
            self.remarks = Some(remarks);
        }
        if let Some(street) = patch.street {
            self.street = Some(street);
        }
        if let Some(side) = patch.side {
            self.side = Some(side);
        }
        if let Some(begin_station) = patch.begin_station {
            self.begin_station = Some(begin_station);
        }
        if let Some(end_station) = patch.end_station {
            self.end_station = Some(end_station);
        }
        self
    }
}

static SCHEMA: ResourceSchema = ResourceSchema {
    kind: TabItem::OBJECT,
    fields: &[
        FieldSpec::parent("contractItemId"),
        FieldSpec::optional("tabSet", FieldType::String),
        FieldSpec::required("quantity", FieldType::Number),
        FieldSpec::optional("remarks", FieldType::String),
        FieldSpec::optional("street", FieldType::String),
        FieldSpec::optional("side", FieldType::String),
        FieldSpec::optional("beginStation", FieldType::Integer),
        FieldSpec::optional("endStation", FieldType::Integer),
    ],
};

/// DTO for creating a tab item under a contract item.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTabItem {
    pub contract_item_id: String,
    pub tab_set: Option<String>,
    pub quantity: f64,
    pub remarks: Option<String>,
    pub street: Option<String>,
    pub side: Option<String>,
    pub begin_station: Option<i64>,
    pub end_station: Option<i64>,
}

impl Resource for CreateTabItem {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Create;
}

/// DTO for updating a tab item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTabItem {
    pub tab_set: Option<String>,
    pub quantity: Option<f64>,
    pub remarks: Option<String>,
    pub street: Option<String>,
    pub side: Option<String>,
    pub begin_station: Option<i64>,
    pub end_station: Option<i64>,
}

impl Resource for UpdateTabItem {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Update;
}

/// Extra predicate for tab item lookups (`?contractItemId=`).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItemFilter {
    pub contract_item_id: Option<DbId>,
}
