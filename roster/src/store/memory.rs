use std::collections::BTreeMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::model::{NewUser, User};
use crate::query::{PageRequest, Predicate};

use super::{Slice, StoreError, StoreOperation, StoreResult, UserStore};

/// Users held in memory, ordered by id
///
/// Count and slice of a page are both taken under one read guard.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: RwLock<BTreeMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing records, hidden ones included
    pub fn with_records(records: impl IntoIterator<Item = User>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|u| (u.id, u)).collect()),
        }
    }
}

fn poisoned(operation: StoreOperation) -> StoreError {
    StoreError::unavailable(operation, "user store lock poisoned")
}

impl UserStore for InMemoryUserStore {
    async fn find_page(&self, predicate: &Predicate, page: PageRequest) -> StoreResult<Slice> {
        let records = self
            .records
            .read()
            .map_err(|_| poisoned(StoreOperation::FindPage))?;

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let mut total = 0u64;
        let mut items = Vec::new();
        for user in records.values().filter(|u| predicate.matches(u)) {
            let position = total as usize;
            if position >= offset && items.len() < page.size() as usize {
                items.push(user.clone());
            }
            total += 1;
        }

        Ok(Slice { items, total })
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let records = self.records.read().map_err(|_| {
            poisoned(StoreOperation::FindById).with_entity(id.to_string())
        })?;
        Ok(records.get(&id).cloned())
    }

    async fn insert(&self, user: NewUser) -> StoreResult<User> {
        let mut records = self
            .records
            .write()
            .map_err(|_| poisoned(StoreOperation::Insert))?;

        let mut id = Uuid::new_v4();
        while records.contains_key(&id) {
            id = Uuid::new_v4();
        }
        let user = user.into_user(id);
        records.insert(id, user.clone());
        Ok(user)
    }
}
