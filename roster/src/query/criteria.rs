use std::collections::BTreeSet;

use crate::model::{Gender, UserType};

/// Optional search criteria for users
///
/// Every field is independent. `None` means "no constraint" and is never
/// treated as an empty string or zero.
///
/// # Example
///
/// ```rust
/// use roster::model::{Gender, UserType};
/// use roster::query::SearchCriteria;
///
/// let criteria = SearchCriteria::new()
///     .with_name("J")
///     .with_gender(Gender::Male)
///     .with_types([UserType::T1]);
/// assert!(criteria.older_than.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Substring of the name
    pub name: Option<String>,
    /// Minimum age in whole years
    pub older_than: Option<u32>,
    /// Accepted user types; empty behaves like `None`
    pub types: Option<BTreeSet<UserType>>,
    pub gender: Option<Gender>,
}

impl SearchCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_older_than(mut self, years: u32) -> Self {
        self.older_than = Some(years);
        self
    }

    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = UserType>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}
