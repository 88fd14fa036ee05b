use sea_orm::{DbErr, RuntimeErr, SqlErr, sqlx};
use thiserror::Error;

/// SQLSTATE Postgres reports for a unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The database rejected a write because of a unique constraint.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("database error: {0}")]
    Db(DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StoreError::UniqueViolation(_))
    }
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match unique_violation(&err) {
            Some(detail) => StoreError::UniqueViolation(detail),
            None => StoreError::Db(err),
        }
    }
}

fn unique_violation(err: &DbErr) -> Option<String> {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return Some(detail);
    }

    // sql_err only recognises the driver's own error type; fall back to SQLSTATE
    let (DbErr::Exec(RuntimeErr::SqlxError(source)) | DbErr::Query(RuntimeErr::SqlxError(source))) =
        err
    else {
        return None;
    };
    match &**source {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            Some(db.message().to_string())
        }
        _ => None,
    }
}
