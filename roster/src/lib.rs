//! # roster
//!
//! User directory service with conditional, paged search.
//!
//! Optional search criteria become independent predicate fragments that are
//! combined with AND. Absent criteria drop out. Soft-deleted users are always
//! excluded. Every page carries the size of the whole filtered set.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use roster::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let service = UserService::new(InMemoryUserStore::new(), Arc::new(SystemClock));
//!
//!     let criteria = SearchCriteria::new().with_name("J").with_gender(Gender::Male);
//!     let page = service.search(&criteria, PageRequest::default()).await?;
//!     assert_eq!(page.total_count, 0);
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod observability;
pub mod query;
pub mod server;
pub mod service;
pub mod store;

#[cfg(test)]
mod fixtures;

pub use error::{Error, Result};

/// Common imports
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::model::{Gender, NewUser, User, UserDto, UserType};
    pub use crate::observability::init_tracing;
    pub use crate::query::{Page, PageRequest, SearchCriteria};
    pub use crate::server::Server;
    pub use crate::service::UserService;
    pub use crate::store::{InMemoryUserStore, UserStore};

    #[cfg(feature = "database")]
    pub use crate::store::PgUserStore;
}
