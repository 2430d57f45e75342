//! Item data model: lost and found postings.
//!
//! An item belongs to exactly one registered user. The lost flag
//! distinguishes a "lost" posting (true) from a "found" posting (false).
//! Items are created once and never mutated or deleted.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::UserId;

/// Store-assigned item identifier, monotone and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i32);

impl ItemId {
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

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Validation errors returned by [`NewItem::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyTitle,
    EmptyDescription,
    EmptyLocation,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::EmptyLocation => write!(f, "location must not be empty"),
        }
    }
}

impl std::error::Error for ItemValidationError {}

/// Validated item posting input.
///
/// ## Invariants
/// - `title`, `description`, and `location` are non-empty once trimmed.
/// - `user_id` is checked against the users table by the store's foreign
///   key at insert time, not here.
///
/// The creation timestamp is assigned by the store at insert time and is
/// deliberately absent from this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    title: String,
    description: String,
    location: String,
    is_lost: bool,
    user_id: UserId,
}

impl NewItem {
    /// Validate and construct posting input from raw request fields.
    pub fn try_from_parts(
        title: &str,
        description: &str,
        location: &str,
        is_lost: bool,
        user_id: UserId,
    ) -> Result<Self, ItemValidationError> {
        let title = title.trim();
        let description = description.trim();
        let location = location.trim();
        if title.is_empty() {
            return Err(ItemValidationError::EmptyTitle);
        }
        if description.is_empty() {
            return Err(ItemValidationError::EmptyDescription);
        }
        if location.is_empty() {
            return Err(ItemValidationError::EmptyLocation);
        }
        Ok(Self {
            title: title.to_owned(),
            description: description.to_owned(),
            location: location.to_owned(),
            is_lost,
            user_id,
        })
    }

    /// Short title of the posting.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Where the item was lost or found.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// True for a lost posting, false for a found posting.
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.is_lost
    }

    /// Identifier of the posting user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }
}

/// Search criteria for item listings.
///
/// The query matches as a case-insensitive substring against title,
/// description, and location; an item matches when the substring appears in
/// any of the three. An empty query matches every item. When `is_lost` is
/// `None` both lost and found postings are returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilter {
    pub query: String,
    pub is_lost: Option<bool>,
}

impl SearchFilter {
    /// Build a filter from an optional free-text query and lost flag.
    #[must_use]
    pub fn new(query: impl Into<String>, is_lost: Option<bool>) -> Self {
        Self {
            query: query.into(),
            is_lost,
        }
    }
}

/// Owning user as embedded in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    /// Display name of the posting user.
    #[schema(example = "Ann")]
    pub name: String,
    /// Contact email of the posting user.
    #[schema(example = "ann@x.com")]
    pub email: String,
}

/// Search result row: an item joined with its owning user.
///
/// Serialises to the wire shape
/// `{id, title, description, location, is_lost, timestamp, user: {name, email}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemSummary {
    /// Store-assigned identifier.
    #[schema(value_type = i32, example = 1)]
    pub id: ItemId,
    /// Short title of the posting.
    #[schema(example = "Black Wallet")]
    pub title: String,
    /// Free-text description.
    #[schema(example = "lost near park")]
    pub description: String,
    /// Where the item was lost or found.
    #[schema(example = "Central Park")]
    pub location: String,
    /// True for a lost posting, false for a found posting.
    pub is_lost: bool,
    /// Store-assigned creation timestamp (UTC, second precision).
    pub timestamp: NaiveDateTime,
    /// Owning user.
    pub user: UserSummary,
}
