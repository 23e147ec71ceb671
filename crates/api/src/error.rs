use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tabsheet_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the form `{ "error": ..., "code": ..., "details"?: [...] }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tabsheet_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message (malformed JSON,
    /// unparseable query string).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                err @ CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string(), None)
                }
                CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
                CoreError::Validation(violations) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Request body failed validation".to_string(),
                    Some(violations),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg, None)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        INTERNAL_MESSAGE.to_string(),
                        None,
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, axum::Json(body)).into_response()
    }
}
