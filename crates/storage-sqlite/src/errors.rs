//! Conversion from Diesel/r2d2 errors into the storage-agnostic core errors.

use folionest_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Internal storage error, converted to `folionest_core::Error` at the
/// repository boundary.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database query failed: {0}")]
    Diesel(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Stored value is corrupt: {0}")]
    Corrupt(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Diesel(diesel::result::Error::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::Diesel(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            StorageError::Pool(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::Migration(msg) => Error::Database(DatabaseError::MigrationFailed(msg)),
            StorageError::Corrupt(msg) => Error::Database(DatabaseError::Internal(msg)),
        }
    }
}
