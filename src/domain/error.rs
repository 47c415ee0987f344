use color_eyre::eyre::Report;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum APIError {
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Not authorized: {0}")]
    Forbidden(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Storage error")]
    StorageError(#[source] Report),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
