//! Backing stores for user records
//!
//! The [`UserStore`] trait uses RPITIT (Return Position Impl Trait In Traits)
//! so implementations can be written with plain `async fn`.
//!
//! - [`InMemoryUserStore`]: ordered map behind a read/write lock
//! - `PgUserStore` (feature `database`): PostgreSQL through `sqlx`

mod error;
mod memory;
#[cfg(feature = "database")]
mod postgres;

use std::future::Future;

use uuid::Uuid;

use crate::model::{NewUser, User};
use crate::query::{PageRequest, Predicate};

pub use error::{StoreError, StoreErrorKind, StoreOperation};
pub use memory::InMemoryUserStore;
#[cfg(feature = "database")]
pub use postgres::PgUserStore;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// One page of matching records plus the size of the whole match set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    /// Records of the requested page, ascending by id
    pub items: Vec<User>,
    /// Number of records matching the predicate across the collection
    pub total: u64,
}

/// Storage seam used by [`UserService`](crate::service::UserService)
///
/// Implementations must compute `items` and `total` of a [`Slice`] from the
/// same state of the collection.
pub trait UserStore: Send + Sync {
    /// Records matching `predicate`, ordered by id, at `page`
    ///
    /// A page past the end yields no items and the correct total.
    fn find_page(
        &self,
        predicate: &Predicate,
        page: PageRequest,
    ) -> impl Future<Output = StoreResult<Slice>> + Send;

    /// The record with this id, whether visible or not
    fn find_by_id(&self, id: Uuid) -> impl Future<Output = StoreResult<Option<User>>> + Send;

    /// Persist a new record under a freshly generated id
    fn insert(&self, user: NewUser) -> impl Future<Output = StoreResult<User>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FailingStore;

    #[tokio::test]
    async fn test_store_trait_can_be_implemented() {
        let store = FailingStore::default();
        let err = store
            .find_page(&Predicate::Noop, PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.operation, StoreOperation::FindPage);
        let err = store.find_by_id(Uuid::nil()).await.unwrap_err();
        assert_eq!(err.entity_id.as_deref(), Some("00000000-0000-0000-0000-000000000000"));
        assert_eq!(store.calls(), 2);
    }
}
