//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// Registered users.
    ///
    /// The `id` column is the rowid primary key with AUTOINCREMENT, so
    /// identifiers are monotone and never reused.
    users (id) {
        /// Primary key assigned by the store.
        id -> Integer,
        /// Display name (non-empty).
        name -> Text,
        /// Contact email, unique across all users.
        email -> Text,
    }
}

diesel::table! {
    /// Lost and found postings.
    items (id) {
        /// Primary key assigned by the store.
        id -> Integer,
        /// Short title (non-empty).
        title -> Text,
        /// Free-text description (non-empty).
        description -> Text,
        /// Where the item was lost or found (non-empty).
        location -> Text,
        /// True for lost, false for found.
        is_lost -> Bool,
        /// Owning user; foreign key into `users`.
        user_id -> Integer,
        /// Creation timestamp assigned by the store at insert time.
        timestamp -> Timestamp,
    }
}

diesel::joinable!(items -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(items, users);
