//! Ten-user data set shared by unit tests; four records are soft-deleted

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::clock::FixedClock;
use crate::model::{Gender, NewUser, User, UserType};
use crate::query::{PageRequest, Predicate};
use crate::store::{InMemoryUserStore, Slice, StoreError, StoreOperation, StoreResult, UserStore};

pub const JOHN_DOE: Uuid = Uuid::from_u128(0x0f5df27d_a862_4fce_b791_c0b92cfd2e28);
pub const MARY_JOHNSON: Uuid = Uuid::from_u128(0x1c1e3abc_14f2_4d6b_9b78_1b86d9fbb2a7);
pub const MICHAEL_SCOTT: Uuid = Uuid::from_u128(0x56a8d4b1_86a4_4dbf_9c29_12ed6d5010d3);
pub const EMMA_WILSON: Uuid = Uuid::from_u128(0x743c9fdd_1e9c_40c7_87b6_3f21f6fae9ab);
pub const OLIVER_BROWN: Uuid = Uuid::from_u128(0x83d03f79_d5e2_4990_9fbc_c3cd5c6c0172);
pub const JANE_SMITH: Uuid = Uuid::from_u128(0x9c5fbd1e_b6a7_4c3f_b5b3_24c3a9f1c982);
pub const ROBERT_GREEN: Uuid = Uuid::from_u128(0xa4e80f0e_6bfa_4e8f_9e42_48e37837c54f);
pub const SOPHIA_TAYLOR: Uuid = Uuid::from_u128(0xba125b3b_b2ab_4f9b_99f1_93ceee52f781);
pub const JAMES_TAYLOR: Uuid = Uuid::from_u128(0xcf458c3f_3eac_4f8e_abc6_75215eb8f774);
pub const ALICE_COOPER: Uuid = Uuid::from_u128(0xd9a63c7f_6a5f_4db7_9b7e_284e9348b5c9);

fn user(
    id: Uuid,
    name: &str,
    (y, m, d): (i32, u32, u32),
    gender: Gender,
    user_type: UserType,
    enabled: bool,
) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        birthdate: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        gender,
        user_type,
        enabled,
    }
}

pub fn users() -> Vec<User> {
    use Gender::{Female, Male};
    use UserType::{T1, T2, T3};
    vec![
        user(JOHN_DOE, "John Doe", (1985, 3, 10), Male, T1, true),
        user(MARY_JOHNSON, "Mary Johnson", (1993, 8, 2), Female, T2, false),
        user(MICHAEL_SCOTT, "Michael Scott", (1980, 7, 21), Male, T1, true),
        user(EMMA_WILSON, "Emma Wilson", (1996, 12, 1), Female, T3, false),
        user(OLIVER_BROWN, "Oliver Brown", (1995, 2, 14), Male, T2, true),
        user(JANE_SMITH, "Jane Smith", (1992, 6, 30), Female, T3, true),
        user(ROBERT_GREEN, "Robert Green", (1988, 1, 5), Male, T1, true),
        user(SOPHIA_TAYLOR, "Sophia Taylor", (1999, 9, 9), Female, T2, false),
        user(JAMES_TAYLOR, "James Taylor", (1994, 11, 15), Male, T1, true),
        user(ALICE_COOPER, "Alice Cooper", (2000, 4, 18), Female, T3, false),
    ]
}

pub fn store() -> InMemoryUserStore {
    InMemoryUserStore::with_records(users())
}

/// 2024-11-23T10:15:30Z
pub fn clock() -> FixedClock {
    let instant: DateTime<Utc> = "2024-11-23T10:15:30Z".parse().unwrap();
    FixedClock::new(instant)
}

/// Store that fails every call and counts how many it received
///
/// Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct FailingStore {
    calls: Arc<AtomicUsize>,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl UserStore for FailingStore {
    async fn find_page(&self, _predicate: &Predicate, _page: PageRequest) -> StoreResult<Slice> {
        self.record();
        Err(StoreError::unavailable(StoreOperation::FindPage, "connection refused"))
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        self.record();
        Err(StoreError::unavailable(StoreOperation::FindById, "connection refused")
            .with_entity(id.to_string()))
    }

    async fn insert(&self, _user: NewUser) -> StoreResult<User> {
        self.record();
        Err(StoreError::query_failed(StoreOperation::Insert, "duplicate key"))
    }
}
