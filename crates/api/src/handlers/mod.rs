//! Request handlers.
//!
//! Every entity exposes the same operations, so the handlers in
//! [`resource`] are generic over a [`ScopedService`](crate::services::ScopedService)
//! and instantiated per entity in `routes`. Each handler resolves the
//! caller, builds the request context, delegates to the service and maps
//! errors via [`AppError`](crate::error::AppError).

pub mod resource;
