//! Store error classification.
//!
//! Native PostgreSQL failures are sorted into exactly two buckets here, so
//! the service layer never inspects SQLSTATE codes itself.

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Failure of a single store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    Duplicate { constraint: String },

    /// Anything else: connectivity, foreign keys, decoding, ...
    #[error("Database error: {0}")]
    Unknown(sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return StoreError::Duplicate {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        StoreError::Unknown(err)
    }
}
