//! SQLite-backed `ItemRepository` implementation using Diesel ORM.
//!
//! Posting is a single insert with the timestamp assigned by the store;
//! referential integrity against the users table is enforced by the
//! foreign key, never silently bypassed. Search runs one joined query and
//! returns rows in ascending item id order.

use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{ItemPersistenceError, ItemRepository};
use crate::domain::{ItemId, ItemSummary, NewItem, SearchFilter, UserSummary};

use super::models::{ItemRow, NewItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::{items, users};

/// Diesel-backed implementation of the [`ItemRepository`] port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain item persistence errors.
fn map_pool_error(error: PoolError) -> ItemPersistenceError {
    match error {
        PoolError::Checkout { message }
        | PoolError::Build { message }
        | PoolError::Migration { message } => ItemPersistenceError::connection(message),
    }
}

/// Map Diesel errors to domain item persistence errors.
///
/// The only foreign key on the items table references `users`, so a
/// foreign key violation maps directly to
/// [`ItemPersistenceError::UnknownUser`].
fn map_diesel_error(error: diesel::result::Error) -> ItemPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            ItemPersistenceError::UnknownUser
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ItemPersistenceError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => {
            ItemPersistenceError::query("database query error")
        }
        _ => ItemPersistenceError::query("database error"),
    }
}

/// Convert a joined database row to a domain search result.
fn row_to_summary(row: ItemRow, name: String, email: String) -> ItemSummary {
    ItemSummary {
        id: ItemId::new(row.id),
        title: row.title,
        description: row.description,
        location: row.location,
        is_lost: row.is_lost,
        timestamp: row.timestamp,
        user: UserSummary { name, email },
    }
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn insert(&self, item: &NewItem) -> Result<ItemId, ItemPersistenceError> {
        let pool = self.pool.clone();
        let item = item.clone();

        let id = tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            diesel::insert_into(items::table)
                .values(NewItemRow {
                    title: item.title(),
                    description: item.description(),
                    location: item.location(),
                    is_lost: item.is_lost(),
                    user_id: item.user_id().as_i32(),
                })
                .returning(items::id)
                .get_result::<i32>(&mut conn)
                .map_err(map_diesel_error)
        })
        .await
        .map_err(|err| ItemPersistenceError::query(format!("blocking task failed: {err}")))??;

        Ok(ItemId::new(id))
    }

    async fn search(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<ItemSummary>, ItemPersistenceError> {
        let pool = self.pool.clone();
        let filter = filter.clone();

        let rows = tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;

            // SQLite LIKE is case-insensitive for ASCII; an empty query
            // yields the pattern "%%" which matches every row.
            let pattern = format!("%{}%", filter.query);
            let mut query = items::table
                .inner_join(users::table)
                .select((ItemRow::as_select(), users::name, users::email))
                .order(items::id.asc())
                .into_boxed();

            query = query.filter(
                items::title
                    .like(pattern.clone())
                    .or(items::description.like(pattern.clone()))
                    .or(items::location.like(pattern)),
            );
            if let Some(is_lost) = filter.is_lost {
                query = query.filter(items::is_lost.eq(is_lost));
            }

            query
                .load::<(ItemRow, String, String)>(&mut conn)
                .map_err(map_diesel_error)
        })
        .await
        .map_err(|err| ItemPersistenceError::query(format!("blocking task failed: {err}")))??;

        Ok(rows
            .into_iter()
            .map(|(row, name, email)| row_to_summary(row, name, email))
            .collect())
    }
}
