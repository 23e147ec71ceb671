//! Estimate entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tabsheet_core::schema::{FieldSpec, FieldType, Mode, Resource, ResourceSchema};
use tabsheet_core::types::{DbId, Timestamp};
use validator::Validate;

use super::ApiObject;

/// A row from the `estimates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub id: DbId,
    pub project_id: DbId,
    pub estimate_number: String,
    /// Serialized as `YYYY-MM-DD`.
    pub period_ending: NaiveDate,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: Timestamp,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: Timestamp,
}

impl ApiObject for Estimate {
    const OBJECT: &'static str = "estimate";

    fn id(&self) -> DbId {
        self.id
    }
}

impl Estimate {
    pub fn merge(mut self, patch: UpdateEstimate) -> Self {
        if let Some(estimate_number) = patch.estimate_number {
            self.estimate_number = estimate_number;
        }
        if let Some(period_ending) = patch.period_ending {
            self.period_ending = period_ending;
        }
        self
    }
}

static SCHEMA: ResourceSchema = ResourceSchema {
    kind: Estimate::OBJECT,
    fields: &[
        FieldSpec::parent("projectId"),
        FieldSpec::required("estimateNumber", FieldType::String),
        FieldSpec::required("periodEnding", FieldType::Date),
    ],
};

/// DTO for creating an estimate under a project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEstimate {
    pub project_id: String,
    #[validate(length(min = 1, max = 64))]
    pub estimate_number: String,
    pub period_ending: NaiveDate,
}

impl Resource for CreateEstimate {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Create;
}

/// DTO for updating an estimate. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEstimate {
    #[validate(length(min = 1, max = 64))]
    pub estimate_number: Option<String>,
    pub period_ending: Option<NaiveDate>,
}

impl Resource for UpdateEstimate {
    const SCHEMA: &'static ResourceSchema = &SCHEMA;
    const MODE: Mode = Mode::Update;
}

/// Extra predicate for estimate lookups (`?projectId=`).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateFilter {
    pub project_id: Option<DbId>,
}
