//! Search criteria, predicate composition and paging
//!
//! ```rust
//! use chrono::NaiveDate;
//! use roster::clock::FixedClock;
//! use roster::query::{compose, SearchCriteria};
//!
//! let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 11, 23).unwrap());
//! let predicate = compose(&SearchCriteria::new().with_name("J"), &clock);
//! assert_eq!(predicate.to_string(), "name CONTAINS \"J\" AND enabled = true");
//! ```

mod criteria;
pub mod fragments;
mod page;
mod predicate;
mod specification;

pub use criteria::SearchCriteria;
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use predicate::{Field, FilterCondition, FilterOperator, FilterValue, Predicate};
pub use specification::{compose, Specification};
