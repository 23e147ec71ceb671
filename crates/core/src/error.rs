use crate::schema::FieldViolation;

/// Domain error taxonomy.
///
/// Out-of-scope rows are reported as [`CoreError::NotFound`], exactly like
/// missing ones, so a caller can never probe for ids owned by another
/// organization.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("A {entity} with an id of {id} does not exist.")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Error for a unique-constraint hit on `field` within the parent scope.
    pub fn duplicate(entity: &str, field: &str) -> Self {
        CoreError::BadRequest(format!("A {entity} with that {field} already exists."))
    }
}
