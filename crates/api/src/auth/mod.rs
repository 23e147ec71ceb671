//! Bearer-token primitives.
//!
//! Users sign in with the external identity provider; this service only
//! verifies the HS256 access tokens it issues.

pub mod jwt;
