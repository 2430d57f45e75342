//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{items, users};

/// Insertable struct for creating new user records.
///
/// The `id` column is assigned by the store and deliberately absent.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Insertable struct for creating new item records.
///
/// The `id` and `timestamp` columns are assigned by the store and
/// deliberately absent.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub is_lost: bool,
    pub user_id: i32,
}

/// Row struct for reading items in search results.
///
/// `user_id` is not selected; search results embed the joined user columns
/// instead of the raw foreign key.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ItemRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub is_lost: bool,
    pub timestamp: NaiveDateTime,
}
