pub mod manager;
pub mod models;

/// Postgres unique_violation (23505). Insert races against pre-checks
/// resolve here and are translated to conflict signals by callers.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
