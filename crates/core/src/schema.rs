//! Declarative request-body schemas.
//!
//! Each resource body is described by a static [`ResourceSchema`]: a list of
//! fields with a JSON type and a required flag. Checking a body is a pure
//! transform from `serde_json::Value` to either a cleaned object map or the
//! full list of [`FieldViolation`]s, one per broken rule. The cleaned map is
//! then deserialized into the typed DTO and run through its `validator`
//! content rules.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::error::{CoreError, CoreResult};

/// Rule names reported in [`FieldViolation::rule`].
pub mod rules {
    pub const REQUIRED: &str = "required";
    pub const EXTRA: &str = "extra";
    pub const OBJECT: &str = "object";
    pub const STRING: &str = "string";
    pub const NUMBER: &str = "number";
    pub const INTEGER: &str = "integer";
    pub const BOOLEAN: &str = "boolean";
    pub const DATE: &str = "date";
}

/// JSON shape accepted for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
    /// A string holding a `YYYY-MM-DD` calendar date.
    Date,
}

impl FieldType {
    fn rule(self) -> &'static str {
        match self {
            FieldType::String => rules::STRING,
            FieldType::Number => rules::NUMBER,
            FieldType::Integer => rules::INTEGER,
            FieldType::Boolean => rules::BOOLEAN,
            FieldType::Date => rules::DATE,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            FieldType::String => "a string",
            FieldType::Number => "a number",
            FieldType::Integer => "an integer",
            FieldType::Boolean => "a boolean",
            FieldType::Date => "a date formatted as YYYY-MM-DD",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Integer => value.is_i64(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Date => value
                .as_str()
                .is_some_and(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()),
        }
    }
}

/// One declared field of a resource body.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    /// The id of the owning row. Accepted only on flat creates; immutable
    /// afterwards, and supplied by the path on nested creates.
    pub parent: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: true,
            parent: false,
        }
    }

    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: false,
            parent: false,
        }
    }

    pub const fn parent(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::String,
            required: true,
            parent: true,
        }
    }
}

/// The schema of one resource body.
#[derive(Debug)]
pub struct ResourceSchema {
    /// Object tag of the resource, used in messages.
    pub kind: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Which operation a body is checked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Flat create: the parent id travels in the body.
    Create,
    /// Nested create: the parent id comes from the URL path.
    CreateNested,
    /// Partial update: nothing is required and parent ids are immutable.
    Update,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::new(field, rules::REQUIRED, format!("`{field}` is required"))
    }

    fn extra(field: &str) -> Self {
        Self::new(field, rules::EXTRA, format!("`{field}` is not allowed"))
    }
}

impl ResourceSchema {
    /// Check `body` against the schema.
    ///
    /// On success returns the object with `null` values dropped, so optional
    /// DTO fields deserialize to `None`.
    pub fn check(&self, body: &Value, mode: Mode) -> Result<Map<String, Value>, Vec<FieldViolation>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldViolation::new(
                "",
                rules::OBJECT,
                "request body must be a JSON object",
            )]);
        };

        let mut violations = Vec::new();
        let mut cleaned = Map::new();

        for spec in self.fields {
            let accepts_parent = mode == Mode::Create;
            match object.get(spec.name) {
                Some(_) if spec.parent && !accepts_parent => {
                    violations.push(FieldViolation::extra(spec.name));
                }
                None if spec.parent && !accepts_parent => {}
                None | Some(Value::Null) => {
                    let present = object.contains_key(spec.name);
                    if spec.required && (mode != Mode::Update || present) {
                        violations.push(FieldViolation::required(spec.name));
                    }
                }
                Some(value) if !spec.ty.accepts(value) => {
                    violations.push(FieldViolation::new(
                        spec.name,
                        spec.ty.rule(),
                        format!("`{}` must be {}", spec.name, spec.ty.describe()),
                    ));
                }
                Some(value) => {
                    cleaned.insert(spec.name.to_string(), value.clone());
                }
            }
        }

        for key in object.keys() {
            if !self.fields.iter().any(|f| f.name == key) {
                violations.push(FieldViolation::extra(key));
            }
        }

        if violations.is_empty() {
            Ok(cleaned)
        } else {
            Err(violations)
        }
    }

    fn parent_field(&self) -> Option<&'static str> {
        self.fields.iter().find(|f| f.parent).map(|f| f.name)
    }
}

/// A typed request body bound to its schema.
pub trait Resource: DeserializeOwned + Validate {
    const SCHEMA: &'static ResourceSchema;
    const MODE: Mode;
}

/// Run the schema gate, deserialize and apply content rules.
pub fn validate<T: Resource>(body: &Value) -> CoreResult<T> {
    let cleaned = T::SCHEMA.check(body, T::MODE).map_err(CoreError::Validation)?;
    finish(cleaned)
}

/// Like [`validate`] for nested create routes: the parent id is taken from
/// the path and must not appear in the body.
pub fn validate_nested<T: Resource>(body: &Value, parent_id: &str) -> CoreResult<T> {
    let mut cleaned = T::SCHEMA
        .check(body, Mode::CreateNested)
        .map_err(CoreError::Validation)?;
    let field = T::SCHEMA.parent_field().ok_or_else(|| {
        CoreError::Internal(format!("{} schema has no parent field", T::SCHEMA.kind))
    })?;
    cleaned.insert(field.to_string(), Value::String(parent_id.to_string()));
    finish(cleaned)
}

fn finish<T: Resource>(cleaned: Map<String, Value>) -> CoreResult<T> {
    let resource: T = serde_json::from_value(Value::Object(cleaned)).map_err(|e| {
        CoreError::Internal(format!(
            "{} body passed its schema but failed to deserialize: {e}",
            T::SCHEMA.kind
        ))
    })?;
    resource
        .validate()
        .map_err(|errors| CoreError::Validation(content_violations(&errors)))?;
    Ok(resource)
}

/// Flatten `validator` errors into violations keyed by the JSON field name.
pub fn content_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = camel_case(field.as_ref());
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("`{field}` failed the {} rule", e.code));
                FieldViolation::new(field.clone(), e.code.to_string(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

/// `unit_price` -> `unitPrice`.
fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
