//! Helpers for classifying database errors.

/// Returns true if the error is a unique-constraint violation reported by the database.
///
/// Concurrent inserts of the same short code are serialized by the `links`
/// primary key; the loser of the race surfaces here.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
