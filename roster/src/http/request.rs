//! Request parameters and bodies, validated into domain values

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::model::{Gender, NewUser, UserType};
use crate::query::{PageRequest, SearchCriteria};

/// `local@domain.tld` shape, no whitespace
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Query string of `GET /users`
///
/// `types` is comma-separated (`types=T1,T3`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub older_than: Option<u32>,
    pub types: Option<String>,
    pub gender: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u32>,
}

impl SearchParams {
    pub fn criteria(&self) -> Result<SearchCriteria> {
        let types = self
            .types
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::parse::<UserType>)
                    .collect::<std::result::Result<BTreeSet<_>, _>>()
            })
            .transpose()
            .map_err(Error::Validation)?;

        let gender = self
            .gender
            .as_deref()
            .map(str::parse::<Gender>)
            .transpose()
            .map_err(Error::Validation)?;

        Ok(SearchCriteria {
            name: self.name.clone(),
            older_than: self.older_than,
            types,
            gender,
        })
    }

    pub fn page_request(&self, limits: &PaginationConfig) -> Result<PageRequest> {
        PageRequest::from_parts(self.page, self.size, limits)
    }
}

/// Body of `POST /users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<Gender>,
    #[serde(rename = "type")]
    pub user_type: Option<UserType>,
}

impl CreateUserRequest {
    /// Check every field and report all problems at once, joined with ", "
    pub fn validate(self) -> Result<NewUser> {
        let mut errors = Vec::new();

        let name = self.name.filter(|n| !n.trim().is_empty());
        if name.is_none() {
            errors.push("Name is mandatory");
        }

        let email = self.email.filter(|e| !e.trim().is_empty());
        match &email {
            None => errors.push("Email is mandatory"),
            Some(e) if !EMAIL_REGEX.is_match(e) => errors.push("Invalid email format"),
            Some(_) => {}
        }

        if self.birthdate.is_none() {
            errors.push("Birthdate is mandatory");
        }
        if self.gender.is_none() {
            errors.push("Gender is mandatory");
        }
        if self.user_type.is_none() {
            errors.push("Type is mandatory");
        }

        match (name, email, self.birthdate, self.gender, self.user_type) {
            (Some(name), Some(email), Some(birthdate), Some(gender), Some(user_type))
                if errors.is_empty() =>
            {
                Ok(NewUser {
                    name,
                    email,
                    birthdate,
                    gender,
                    user_type,
                })
            }
            _ => Err(Error::Validation(errors.join(", "))),
        }
    }
}
