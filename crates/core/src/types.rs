use uuid::Uuid;

/// All primary keys are server-generated UUIDs (v7, time ordered).
pub type DbId = Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate the identifier for a row about to be inserted.
pub fn new_id() -> DbId {
    Uuid::now_v7()
}

/// Parse a client-supplied identifier.
///
/// Returns `None` for anything that is not a UUID. Callers treat that the
/// same as a row that does not exist.
pub fn parse_id(raw: &str) -> Option<DbId> {
    Uuid::parse_str(raw.trim()).ok()
}
