//! Shared error types for the services crate.

use thiserror::Error;

use track_api::ApiError;
use track_core::model::ValidationError;

/// Errors emitted by view loaders and mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("deletion was not confirmed")]
    NotConfirmed,
}

impl ServiceError {
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}
