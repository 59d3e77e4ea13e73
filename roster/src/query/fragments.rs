//! Predicate fragments built from optional criteria
//!
//! Every builder maps an absent value to [`Predicate::Noop`] and a present one
//! to a single condition. Fragments do not look at each other.

use chrono::{Months, NaiveDate};

use crate::clock::Clock;

use super::predicate::{Field, FilterCondition, FilterValue, Predicate};

/// `field` contains `needle` as a literal, case-sensitive substring
///
/// An empty needle is a present value and matches every record.
pub fn substring_match(field: Field, needle: Option<&str>) -> Predicate {
    match needle {
        Some(needle) => FilterCondition::contains(field, needle).into(),
        None => Predicate::Noop,
    }
}

/// `field` is a date strictly earlier than today minus `years` years
///
/// Feb 29 maps to Feb 28 in non-leap years. A span reaching past the earliest
/// representable date yields a cutoff nothing can precede.
pub fn minimum_age(field: Field, years: Option<u32>, clock: &dyn Clock) -> Predicate {
    let Some(years) = years else {
        return Predicate::Noop;
    };
    let cutoff = years
        .checked_mul(12)
        .and_then(|months| clock.today().checked_sub_months(Months::new(months)))
        .unwrap_or(NaiveDate::MIN);
    FilterCondition::lt(field, cutoff).into()
}

/// `field` is one of `values`; an absent or empty set does not restrict
pub fn member_of<I, V>(field: Field, values: Option<I>) -> Predicate
where
    I: IntoIterator<Item = V>,
    V: Into<FilterValue>,
{
    let Some(values) = values else {
        return Predicate::Noop;
    };
    let condition = FilterCondition::in_values(field, values);
    match &condition.value {
        FilterValue::List(list) if list.is_empty() => Predicate::Noop,
        _ => condition.into(),
    }
}

/// `field` equals `value` exactly
pub fn equals<V: Into<FilterValue>>(field: Field, value: Option<V>) -> Predicate {
    match value {
        Some(value) => FilterCondition::eq(field, value).into(),
        None => Predicate::Noop,
    }
}

/// Records whose soft-delete flag equals `expected`; never a no-op
pub fn visibility_is(expected: bool) -> Predicate {
    FilterCondition::eq(Field::Enabled, expected).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::model::UserType;
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_substring_match() {
        assert!(substring_match(Field::Name, None).is_noop());
        assert_eq!(
            substring_match(Field::Name, Some("")),
            Predicate::from(FilterCondition::contains(Field::Name, ""))
        );
    }

    #[test]
    fn test_minimum_age_cutoff() {
        let clock = FixedClock::on(date(2024, 11, 23));
        assert!(minimum_age(Field::Birthdate, None, &clock).is_noop());
        assert_eq!(
            minimum_age(Field::Birthdate, Some(34), &clock),
            Predicate::from(FilterCondition::lt(Field::Birthdate, date(1990, 11, 23)))
        );
        assert_eq!(
            minimum_age(Field::Birthdate, Some(0), &clock),
            Predicate::from(FilterCondition::lt(Field::Birthdate, date(2024, 11, 23)))
        );
    }

    #[test]
    fn test_minimum_age_leap_day_clamps() {
        let clock = FixedClock::on(date(2024, 2, 29));
        assert_eq!(
            minimum_age(Field::Birthdate, Some(1), &clock),
            Predicate::from(FilterCondition::lt(Field::Birthdate, date(2023, 2, 28)))
        );
    }

    #[test]
    fn test_minimum_age_underflow_matches_nothing() {
        let clock = FixedClock::on(date(2024, 11, 23));
        let p = minimum_age(Field::Birthdate, Some(u32::MAX), &clock);
        assert_eq!(
            p,
            Predicate::from(FilterCondition::lt(Field::Birthdate, NaiveDate::MIN))
        );
    }

    #[test]
    fn test_member_of_empty_is_noop() {
        assert!(member_of(Field::Type, None::<Vec<UserType>>).is_noop());
        assert!(member_of(Field::Type, Some(BTreeSet::<UserType>::new())).is_noop());
        assert!(!member_of(Field::Type, Some([UserType::T1])).is_noop());
    }

    #[test]
    fn test_equals() {
        assert!(equals::<bool>(Field::Enabled, None).is_noop());
        assert_eq!(
            equals(Field::Enabled, Some(false)),
            Predicate::from(FilterCondition::eq(Field::Enabled, false))
        );
    }

    #[test]
    fn test_visibility_always_concrete() {
        assert!(!visibility_is(true).is_noop());
        assert!(!visibility_is(false).is_noop());
    }
}
