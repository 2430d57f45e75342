//! Repository ports implemented by outbound persistence adapters.
//!
//! Each trait exposes the operations a handler needs, returning a
//! port-specific error enum so adapters can signal the constraint
//! violations the handlers must distinguish (duplicate email, unknown
//! user) without leaking store details into the domain.

use async_trait::async_trait;
use thiserror::Error;

use super::item::{ItemId, ItemSummary, NewItem, SearchFilter};
use super::user::{NewUser, UserId};

/// Persistence errors raised by [`UserRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// The email is already registered; the store's unique constraint
    /// rejected the insert.
    #[error("email already exists")]
    DuplicateEmail,
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence errors raised by [`ItemRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemPersistenceError {
    /// Repository connection could not be established.
    #[error("item repository connection failed: {message}")]
    Connection { message: String },
    /// The referenced user does not exist; the store's foreign key
    /// rejected the insert.
    #[error("user does not exist")]
    UnknownUser,
    /// Query or mutation failed during execution.
    #[error("item repository query failed: {message}")]
    Query { message: String },
}

impl ItemPersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for registering users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the store-assigned identifier.
    ///
    /// Fails with [`UserPersistenceError::DuplicateEmail`] when the email is
    /// already registered; no record is created in that case.
    async fn insert(&self, user: &NewUser) -> Result<UserId, UserPersistenceError>;
}

/// Port for posting and searching items.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item and return the store-assigned identifier.
    ///
    /// Fails with [`ItemPersistenceError::UnknownUser`] when the owning user
    /// does not exist; no orphan record is created in that case.
    async fn insert(&self, item: &NewItem) -> Result<ItemId, ItemPersistenceError>;

    /// List items matching the filter, each joined with its owning user,
    /// ordered by ascending item identifier. An empty result is a valid
    /// outcome, not an error.
    async fn search(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<ItemSummary>, ItemPersistenceError>;
}
