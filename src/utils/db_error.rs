//! Classification of PostgreSQL errors raised by the `urls` table.

/// Primary key constraint on `urls.encoded_key`.
pub const ENCODED_KEY_CONSTRAINT: &str = "urls_pkey";

/// Returns true when `e` is a unique violation on the encoded key.
pub fn is_unique_violation_on_key(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ENCODED_KEY_CONSTRAINT))
}
