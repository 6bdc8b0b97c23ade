pub mod categories;
pub mod posts;
pub mod slug;
pub mod validation;

use validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,
    #[error("validation failed: {0}")]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// A UNIQUE violation on the slug index means another writer saved the same
/// slug between our check and our write.
fn slug_conflict(err: rusqlite::Error) -> ServiceError {
    match &err {
        rusqlite::Error::SqliteFailure(e, Some(msg))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                && msg.contains(".slug") =>
        {
            let mut errors = ValidationErrors::default();
            errors.add("slug", validation::MSG_TAKEN);
            ServiceError::Invalid(errors)
        }
        _ => ServiceError::Sqlite(err),
    }
}
