//! Per-request context threaded into every service call.
//!
//! A context carries the resolved caller plus whatever the operation needs:
//! an extra filter for reads, a page for lists, a validated body for writes.
//! Ownership ids always come from here or from the URL path.

use crate::pagination::Pagination;
use crate::types::DbId;

/// The authenticated caller, as resolved from the identity provider's token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Identity-provider subject.
    pub user_id: String,
    /// The organization the caller belongs to, if any. A caller without one
    /// owns nothing and every scoped lookup comes back empty.
    pub organization_id: Option<DbId>,
}

/// Context for single-row reads and deletes.
#[derive(Debug, Clone)]
pub struct ReadContext<F = ()> {
    pub user: Principal,
    /// Predicate ANDed into the ownership filter.
    pub filter: F,
}

impl<F: Default> ReadContext<F> {
    pub fn new(user: Principal) -> Self {
        Self {
            user,
            filter: F::default(),
        }
    }
}

impl<F> ReadContext<F> {
    pub fn with_filter(user: Principal, filter: F) -> Self {
        Self { user, filter }
    }
}

/// Context for paginated list reads.
#[derive(Debug, Clone)]
pub struct ReadManyContext<F = ()> {
    pub user: Principal,
    pub filter: F,
    pub pagination: Pagination,
}

impl<F> ReadManyContext<F> {
    pub fn new(user: Principal, filter: F, pagination: Pagination) -> Self {
        Self {
            user,
            filter,
            pagination,
        }
    }
}

/// Context for creates and updates. `resource` has already passed schema
/// validation.
#[derive(Debug, Clone)]
pub struct WriteContext<R> {
    pub user: Principal,
    pub resource: R,
}

impl<R> WriteContext<R> {
    pub fn new(user: Principal, resource: R) -> Self {
        Self { user, resource }
    }

    /// An unfiltered read context for the same caller, used to resolve
    /// parents and existing rows.
    pub fn read<F: Default>(&self) -> ReadContext<F> {
        ReadContext::new(self.user.clone())
    }
}
