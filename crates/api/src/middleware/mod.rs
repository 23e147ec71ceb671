//! Request extractors shared by all handlers.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated caller from a JWT Bearer token.
//! - [`validated::Validated`] -- Parses a JSON body and runs it through its resource schema.
//! - [`validated::JsonBody`] -- Raw JSON body with JSON error rejections.

pub mod auth;
pub mod validated;
