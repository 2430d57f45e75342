//! User data model.
//!
//! A user is a registered participant identified by a globally unique email.
//! Users are created once at registration and never mutated or deleted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned user identifier.
///
/// Identifiers are assigned monotonically by the store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Validation errors returned by [`NewUser::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    EmptyEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Validated registration input.
///
/// ## Invariants
/// - `name` and `email` are non-empty once trimmed of whitespace.
///
/// Email uniqueness is *not* checked here; the store's unique constraint
/// enforces it atomically at insert time so there is no window between a
/// pre-check and the insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate and construct registration input from raw request fields.
    pub fn try_from_parts(name: &str, email: &str) -> Result<Self, UserValidationError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if email.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    /// Display name for the user.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email, unique across all users.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
