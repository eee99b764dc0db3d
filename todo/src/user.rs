//! The list owner and its validity rules.
//!
//! Validity is never cached: every predicate recomputes from the stored
//! fields, and age-dependent checks take the reference date explicitly
//! (`*_on`) or read the system clock.

use crate::constants::{MIN_AGE_YEARS, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN};
use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[allow(clippy::expect_used)]
static PASSWORD_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^[a-zA-Z0-9]{{{PASSWORD_MIN_LEN},{PASSWORD_MAX_LEN}}}$"
    ))
    .expect("password pattern should compile")
});

/// First check a [`User`] failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    /// Email does not look like `local@domain.tld`.
    #[error("Invalid email address: {email}")]
    InvalidEmail {
        /// The rejected address
        email: String,
    },

    /// First name is empty.
    #[error("First name is required")]
    MissingFirstName,

    /// Last name is empty.
    #[error("Last name is required")]
    MissingLastName,

    /// Password fails length or character-class rules.
    #[error(
        "Password must be {min}-{max} letters or digits with at least one lowercase, \
         one uppercase and one digit",
        min = PASSWORD_MIN_LEN,
        max = PASSWORD_MAX_LEN
    )]
    WeakPassword,

    /// User is younger than the minimum age.
    #[error("User must be at least {min} years old (is {age})", min = MIN_AGE_YEARS)]
    TooYoung {
        /// Age in whole years on the reference date
        age: i32,
    },
}

/// A to-do list owner.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Contact address, also the notification target
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Plain-text credential, only ever pattern-checked
    pub password: String,
    /// Date of birth
    pub birthdate: NaiveDate,
}

impl User {
    /// Creates a user. No validation happens here.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password: impl Into<String>,
        birthdate: NaiveDate,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password: password.into(),
            birthdate,
        }
    }

    /// True iff every check passes today.
    ///
    /// "Today" is the UTC date from the system clock. A [`ToDoList`] checks
    /// its owner against its injected clock instead, so near midnight UTC on
    /// a birthday the two can disagree; use [`is_valid_on`](Self::is_valid_on)
    /// with the same date source when that matters.
    ///
    /// [`ToDoList`]: crate::list::ToDoList
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_on(today())
    }

    /// True iff every check passes on `today`.
    #[must_use]
    pub fn is_valid_on(&self, today: NaiveDate) -> bool {
        self.validate_on(today).is_ok()
    }

    /// Runs every check on `today` and reports the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`UserError`] in field order: email, first name,
    /// last name, password, age.
    pub fn validate_on(&self, today: NaiveDate) -> Result<(), UserError> {
        if !self.is_valid_email() {
            return Err(UserError::InvalidEmail {
                email: self.email.clone(),
            });
        }
        self.check_names()?;
        if !self.is_valid_password() {
            return Err(UserError::WeakPassword);
        }
        if !self.is_valid_age_on(today) {
            return Err(UserError::TooYoung {
                age: self.age_on(today),
            });
        }
        Ok(())
    }

    /// Email matches `local@domain.tld` with no whitespace.
    #[must_use]
    pub fn is_valid_email(&self) -> bool {
        EMAIL_PATTERN.is_match(&self.email)
    }

    /// Both names contain something other than whitespace.
    #[must_use]
    pub fn has_valid_names(&self) -> bool {
        self.check_names().is_ok()
    }

    fn check_names(&self) -> Result<(), UserError> {
        if is_blank(&self.first_name) {
            return Err(UserError::MissingFirstName);
        }
        if is_blank(&self.last_name) {
            return Err(UserError::MissingLastName);
        }
        Ok(())
    }

    /// Password is 8-40 ASCII letters or digits with at least one
    /// lowercase, one uppercase and one digit.
    #[must_use]
    pub fn is_valid_password(&self) -> bool {
        let password = &self.password;
        PASSWORD_CHARSET.is_match(password)
            && password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit())
    }

    /// At least 13 years old today, by the system clock's UTC date.
    ///
    /// See [`is_valid`](Self::is_valid) for why callers holding a clock should
    /// prefer [`is_valid_age_on`](Self::is_valid_age_on).
    #[must_use]
    pub fn is_valid_age(&self) -> bool {
        self.is_valid_age_on(today())
    }

    /// At least 13 years old on `today`. The thirteenth birthday itself counts.
    #[must_use]
    pub fn is_valid_age_on(&self, today: NaiveDate) -> bool {
        self.age_on(today) >= MIN_AGE_YEARS
    }

    /// Age in whole years on `today`.
    ///
    /// The year difference is reduced by one until the birthday's month/day
    /// has been reached. A Feb 29 birthday is reached on Mar 1 in common years.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let years = today.year() - self.birthdate.year();
        if (today.month(), today.day()) < (self.birthdate.month(), self.birthdate.day()) {
            years - 1
        } else {
            years
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &"<redacted>")
            .field("birthdate", &self.birthdate)
            .finish()
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}
