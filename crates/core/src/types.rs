/// Database primary keys for users and sessions are PostgreSQL BIGSERIAL.
///
/// Projects are the exception: their id is a caller-supplied TEXT slug that
/// doubles as the public URL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
