//! Store error types
//!
//! Failures raised by a [`UserStore`](super::UserStore) carry the operation
//! that was running and a coarse category. They propagate to the caller
//! unchanged; nothing in this crate retries them.
//!
//! # Example
//!
//! ```rust
//! use roster::store::{StoreError, StoreErrorKind, StoreOperation};
//!
//! let error = StoreError::unavailable(StoreOperation::FindPage, "pool timed out");
//! assert!(matches!(error.kind, StoreErrorKind::StoreUnavailable));
//! assert!(error.is_retriable());
//! ```

use std::fmt;

/// Operation being performed when the store error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Counting and slicing the filtered collection
    FindPage,
    /// Looking up a single record by identity
    FindById,
    /// Persisting a new record
    Insert,
    /// Creating or checking the backing schema
    Schema,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FindPage => write!(f, "find_page"),
            Self::FindById => write!(f, "find_by_id"),
            Self::Insert => write!(f, "insert"),
            Self::Schema => write!(f, "schema"),
        }
    }
}

/// Category of store error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    /// The store could not be reached (connection, pool, I/O, TLS)
    StoreUnavailable,
    /// The store was reached but the query did not complete
    QueryExecutionFailed,
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StoreUnavailable => write!(f, "store_unavailable"),
            Self::QueryExecutionFailed => write!(f, "query_execution_failed"),
        }
    }
}

/// Structured store error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    /// The operation being performed when the error occurred
    pub operation: StoreOperation,
    /// The category of error
    pub kind: StoreErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The record involved, when there is one
    pub entity_id: Option<String>,
}

impl StoreError {
    /// Create a new store error
    pub fn new(operation: StoreOperation, kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_id: None,
        }
    }

    /// The store could not be reached
    pub fn unavailable(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self::new(operation, StoreErrorKind::StoreUnavailable, message)
    }

    /// The query was issued but failed
    pub fn query_failed(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self::new(operation, StoreErrorKind::QueryExecutionFailed, message)
    }

    /// Attach the identity of the record involved
    #[must_use]
    pub fn with_entity(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Whether the same call could succeed later against a healthy store
    ///
    /// ```rust
    /// use roster::store::{StoreError, StoreOperation};
    ///
    /// assert!(!StoreError::query_failed(StoreOperation::Insert, "bad row").is_retriable());
    /// ```
    pub fn is_retriable(&self) -> bool {
        matches!(self.kind, StoreErrorKind::StoreUnavailable)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Store {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref id) = self.entity_id {
            write!(f, " [User: {}]", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {}
