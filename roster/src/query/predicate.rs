//! Storage-independent predicate tree over [`User`] records
//!
//! A [`Predicate`] is either the explicit no-op or a conjunction of
//! [`FilterCondition`]s. Stores either evaluate it directly with
//! [`Predicate::matches`] or render [`Predicate::conditions`] into their own
//! query language.
//!
//! # Example
//!
//! ```rust
//! use roster::query::{Field, FilterCondition, Predicate};
//!
//! let predicate = Predicate::Noop
//!     .and(Predicate::from(FilterCondition::contains(Field::Name, "J")))
//!     .and(Predicate::Noop)
//!     .and(Predicate::from(FilterCondition::eq(Field::Enabled, true)));
//!
//! assert_eq!(predicate.conditions().len(), 2);
//! ```

use std::fmt;

use chrono::NaiveDate;

use crate::model::{Gender, User, UserType};

/// A filterable attribute of a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Birthdate,
    Gender,
    Type,
    Enabled,
}

impl Field {
    /// Column name in the `users` table
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Birthdate => "birthdate",
            Self::Gender => "gender",
            Self::Type => "type",
            Self::Enabled => "enabled",
        }
    }

    fn read<'a>(&self, user: &'a User) -> FieldRef<'a> {
        match self {
            Self::Name => FieldRef::Text(&user.name),
            Self::Email => FieldRef::Text(&user.email),
            Self::Birthdate => FieldRef::Date(user.birthdate),
            Self::Gender => FieldRef::Gender(user.gender),
            Self::Type => FieldRef::UserType(user.user_type),
            Self::Enabled => FieldRef::Bool(user.enabled),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Comparison applied by a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// Exact equality
    Eq,
    /// Strictly less than
    Lt,
    /// Case-sensitive literal substring containment
    Contains,
    /// Membership in a list of values
    In,
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq => write!(f, "="),
            Self::Lt => write!(f, "<"),
            Self::Contains => write!(f, "CONTAINS"),
            Self::In => write!(f, "IN"),
        }
    }
}

/// Operand of a condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Date(NaiveDate),
    Bool(bool),
    Gender(Gender),
    UserType(UserType),
    List(Vec<FilterValue>),
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Gender> for FilterValue {
    fn from(g: Gender) -> Self {
        Self::Gender(g)
    }
}

impl From<UserType> for FilterValue {
    fn from(t: UserType) -> Self {
        Self::UserType(t)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{:?}", s),
            Self::Date(d) => write!(f, "{}", d),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Gender(g) => write!(f, "{}", g),
            Self::UserType(t) => write!(f, "{}", t),
            Self::List(values) => {
                write!(f, "(")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Borrowed view of one attribute of a record
#[derive(Debug, Clone, Copy)]
enum FieldRef<'a> {
    Text(&'a str),
    Date(NaiveDate),
    Bool(bool),
    Gender(Gender),
    UserType(UserType),
}

impl FieldRef<'_> {
    fn equals(&self, value: &FilterValue) -> bool {
        match (self, value) {
            (Self::Text(a), FilterValue::Text(b)) => *a == b.as_str(),
            (Self::Date(a), FilterValue::Date(b)) => a == b,
            (Self::Bool(a), FilterValue::Bool(b)) => a == b,
            (Self::Gender(a), FilterValue::Gender(b)) => a == b,
            (Self::UserType(a), FilterValue::UserType(b)) => a == b,
            _ => false,
        }
    }

    fn less_than(&self, value: &FilterValue) -> bool {
        match (self, value) {
            (Self::Text(a), FilterValue::Text(b)) => *a < b.as_str(),
            (Self::Date(a), FilterValue::Date(b)) => a < b,
            _ => false,
        }
    }
}

/// A single comparison against one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: Field,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl FilterCondition {
    pub fn new(field: Field, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }

    pub fn eq(field: Field, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::Eq, value.into())
    }

    pub fn lt(field: Field, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::Lt, value.into())
    }

    /// Literal substring test; `%`, `_` and `\` carry no pattern meaning
    pub fn contains(field: Field, needle: impl Into<String>) -> Self {
        Self::new(field, FilterOperator::Contains, FilterValue::Text(needle.into()))
    }

    pub fn in_values<V: Into<FilterValue>>(field: Field, values: impl IntoIterator<Item = V>) -> Self {
        Self::new(
            field,
            FilterOperator::In,
            FilterValue::List(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Evaluate against a record. Operand types that do not fit the field never match.
    pub fn matches(&self, user: &User) -> bool {
        let actual = self.field.read(user);
        match (self.operator, &self.value) {
            (FilterOperator::Eq, value) => actual.equals(value),
            (FilterOperator::Lt, value) => actual.less_than(value),
            (FilterOperator::Contains, FilterValue::Text(needle)) => match actual {
                FieldRef::Text(text) => text.contains(needle.as_str()),
                _ => false,
            },
            (FilterOperator::In, FilterValue::List(values)) => {
                values.iter().any(|v| actual.equals(v))
            }
            _ => false,
        }
    }
}

impl fmt::Display for FilterCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

/// Conjunctive predicate over user records
///
/// `Noop` is the identity of [`Predicate::and`]: it accepts every record and
/// disappears when combined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Predicate {
    #[default]
    Noop,
    Condition(FilterCondition),
    And(Vec<FilterCondition>),
}

impl Predicate {
    /// Conjunction of `self` and `other`, flattened
    #[must_use]
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::Noop, p) | (p, Predicate::Noop) => p,
            (lhs, rhs) => {
                let mut conditions = lhs.into_conditions();
                conditions.extend(rhs.into_conditions());
                Predicate::And(conditions)
            }
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Predicate::Noop)
    }

    /// The conjuncts; empty for `Noop`
    pub fn conditions(&self) -> &[FilterCondition] {
        match self {
            Predicate::Noop => &[],
            Predicate::Condition(c) => std::slice::from_ref(c),
            Predicate::And(conditions) => conditions,
        }
    }

    fn into_conditions(self) -> Vec<FilterCondition> {
        match self {
            Predicate::Noop => Vec::new(),
            Predicate::Condition(c) => vec![c],
            Predicate::And(conditions) => conditions,
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        self.conditions().iter().all(|c| c.matches(user))
    }
}

impl From<FilterCondition> for Predicate {
    fn from(condition: FilterCondition) -> Self {
        Predicate::Condition(condition)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conditions = self.conditions();
        if conditions.is_empty() {
            return write!(f, "TRUE");
        }
        for (i, c) in conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(name: &str) -> User {
        User {
            id: Uuid::nil(),
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            gender: Gender::Female,
            user_type: UserType::T2,
            enabled: true,
        }
    }

    #[test]
    fn test_noop_is_identity() {
        let c = Predicate::from(FilterCondition::eq(Field::Gender, Gender::Male));
        assert_eq!(Predicate::Noop.and(c.clone()), c);
        assert_eq!(c.clone().and(Predicate::Noop), c);
        assert_eq!(Predicate::Noop.and(Predicate::Noop), Predicate::Noop);
    }

    #[test]
    fn test_and_flattens() {
        let p = Predicate::from(FilterCondition::eq(Field::Enabled, true))
            .and(Predicate::from(FilterCondition::contains(Field::Name, "a")))
            .and(
                Predicate::from(FilterCondition::eq(Field::Type, UserType::T1))
                    .and(Predicate::from(FilterCondition::eq(Field::Gender, Gender::Male))),
            );
        assert!(matches!(p, Predicate::And(ref v) if v.len() == 4));
    }

    #[test]
    fn test_noop_matches_everything() {
        assert!(Predicate::Noop.matches(&user("")));
    }

    #[test]
    fn test_contains_is_case_sensitive_and_literal() {
        assert!(FilterCondition::contains(Field::Name, "ohn").matches(&user("John Doe")));
        assert!(!FilterCondition::contains(Field::Name, "john").matches(&user("John Doe")));
        assert!(!FilterCondition::contains(Field::Name, "J%n").matches(&user("John")));
        assert!(FilterCondition::contains(Field::Name, "50%_off").matches(&user("a 50%_off b")));
        assert!(FilterCondition::contains(Field::Name, "").matches(&user("")));
    }

    #[test]
    fn test_lt_on_dates() {
        let cutoff = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert!(!FilterCondition::lt(Field::Birthdate, cutoff).matches(&user("x")));
        assert!(FilterCondition::lt(Field::Birthdate, cutoff.succ_opt().unwrap()).matches(&user("x")));
    }

    #[test]
    fn test_in_values() {
        let c = FilterCondition::in_values(Field::Type, [UserType::T1, UserType::T2]);
        assert!(c.matches(&user("x")));
        let c = FilterCondition::in_values(Field::Type, [UserType::T3]);
        assert!(!c.matches(&user("x")));
    }

    #[test]
    fn test_mismatched_operand_never_matches() {
        assert!(!FilterCondition::eq(Field::Gender, "FEMALE").matches(&user("x")));
        assert!(!FilterCondition::lt(Field::Enabled, true).matches(&user("x")));
    }

    #[test]
    fn test_display() {
        let p = Predicate::from(FilterCondition::contains(Field::Name, "J"))
            .and(Predicate::from(FilterCondition::in_values(Field::Type, [UserType::T1, UserType::T3])));
        assert_eq!(p.to_string(), "name CONTAINS \"J\" AND type IN (T1, T3)");
        assert_eq!(Predicate::Noop.to_string(), "TRUE");
    }
}
