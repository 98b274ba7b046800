//! Settings service errors.

use sqlx::Error;
use thiserror::Error;

use crate::database::StorageFailure;

#[derive(Debug, Error)]
pub enum SettingsServiceError {
    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for SettingsServiceError {
    fn from(error: Error) -> Self {
        match StorageFailure::from(error) {
            StorageFailure::MissingRequiredData => Self::MissingRequiredData,
            StorageFailure::InvalidData
            | StorageFailure::NotFound
            | StorageFailure::AlreadyExists
            | StorageFailure::InvalidReference => Self::InvalidData,
            StorageFailure::Other(error) => Self::Sql(error),
        }
    }
}
