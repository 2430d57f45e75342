//! Domain primitives and repository ports.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! layers. Keep types immutable and document invariants and serialisation
//! contracts (serde) in each type's Rustdoc. Nothing in this module depends
//! on Actix or Diesel; adapters translate at the boundary.

pub mod error;
pub mod item;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::item::{
    ItemId, ItemSummary, ItemValidationError, NewItem, SearchFilter, UserSummary,
};
pub use self::user::{NewUser, UserId, UserValidationError};
