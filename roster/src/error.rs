//! Crate error type

use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Failure reported by the backing store
    #[error("{0}")]
    Store(StoreError),

    /// No visible record with this identity
    #[error("User not found")]
    NotFound(Uuid),

    /// Page size or index outside the accepted range
    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    /// Input rejected before reaching the store
    #[error("{0}")]
    Validation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::Store(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreOperation;

    #[test]
    fn test_not_found_message() {
        assert_eq!(Error::NotFound(Uuid::nil()).to_string(), "User not found");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err: Error = StoreError::unavailable(StoreOperation::FindPage, "pool closed").into();
        assert_eq!(
            err.to_string(),
            "Store store_unavailable error during find_page: pool closed"
        );
    }
}
