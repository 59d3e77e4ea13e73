//! Conjunctive composition of fragments

use crate::clock::Clock;

use super::criteria::SearchCriteria;
use super::fragments::{equals, member_of, minimum_age, substring_match, visibility_is};
use super::predicate::{Field, Predicate};

/// Accumulates fragments with AND
///
/// [`build`](Self::build) always appends the visibility rule, so a finished
/// specification never returns soft-deleted records.
#[derive(Debug, Clone, Default)]
pub struct Specification {
    predicate: Predicate,
}

impl Specification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn and(mut self, fragment: Predicate) -> Self {
        self.predicate = self.predicate.and(fragment);
        self
    }

    #[must_use]
    pub fn build(self) -> Predicate {
        self.predicate.and(visibility_is(true))
    }
}

/// Predicate for a user search
pub fn compose(criteria: &SearchCriteria, clock: &dyn Clock) -> Predicate {
    Specification::new()
        .and(substring_match(Field::Name, criteria.name.as_deref()))
        .and(minimum_age(Field::Birthdate, criteria.older_than, clock))
        .and(member_of(
            Field::Type,
            criteria.types.as_ref().map(|types| types.iter().copied()),
        ))
        .and(equals(Field::Gender, criteria.gender))
        .build()
}
