//! User operations over a [`UserStore`]

use std::sync::Arc;

use uuid::Uuid;

use crate::clock::Clock;
use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::model::{NewUser, UserDto};
use crate::query::{compose, Page, PageRequest, SearchCriteria};
use crate::store::UserStore;

/// Search, lookup and creation of users
///
/// Soft-deleted records are invisible to every read path.
pub struct UserService<S> {
    store: S,
    clock: Arc<dyn Clock>,
    limits: PaginationConfig,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            limits: PaginationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: PaginationConfig) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &PaginationConfig {
        &self.limits
    }

    /// Visible users matching every present criterion, one page at a time
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        page: PageRequest,
    ) -> Result<Page<UserDto>> {
        let page = page.clamped(self.limits.max_size);
        let predicate = compose(criteria, self.clock.as_ref());
        tracing::debug!(
            predicate = %predicate,
            page_number = page.index(),
            page_size = page.size(),
            "Searching users"
        );

        let slice = self.store.find_page(&predicate, page).await?;
        tracing::debug!(
            total_count = slice.total,
            returned = slice.items.len(),
            "User search complete"
        );

        let page = Page::new(slice.items, page, slice.total).map(UserDto::from);
        tracing::trace!(
            total_pages = page.total_pages(),
            has_next = page.has_next(),
            "Page assembled"
        );
        Ok(page)
    }

    /// The visible user with this id
    pub async fn get_by_id(&self, id: Uuid) -> Result<UserDto> {
        match self.store.find_by_id(id).await? {
            Some(user) if user.enabled => Ok(user.into()),
            _ => {
                tracing::debug!(user_id = %id, "User not found");
                Err(Error::NotFound(id))
            }
        }
    }

    pub async fn create(&self, user: NewUser) -> Result<UserDto> {
        let user = self.store.insert(user).await?;
        tracing::info!(user_id = %user.id, user_type = %user.user_type, "User created");
        Ok(user.into())
    }
}
