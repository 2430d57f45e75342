//! SQLite-backed `UserRepository` implementation using Diesel ORM.
//!
//! Registration is a single insert; email uniqueness is enforced by the
//! store's unique constraint rather than a pre-check, so concurrent
//! registrations with the same email cannot race past each other.

use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, UserId};

use super::models::NewUserRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain user persistence errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message }
        | PoolError::Build { message }
        | PoolError::Migration { message } => UserPersistenceError::connection(message),
    }
}

/// Map Diesel errors to domain user persistence errors.
///
/// A unique violation can only come from the email column here, so it maps
/// directly to [`UserPersistenceError::DuplicateEmail`].
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
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
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::DuplicateEmail
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => {
            UserPersistenceError::query("database query error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<UserId, UserPersistenceError> {
        let pool = self.pool.clone();
        let name = user.name().to_owned();
        let email = user.email().to_owned();

        let id = tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            diesel::insert_into(users::table)
                .values(NewUserRow {
                    name: &name,
                    email: &email,
                })
                .returning(users::id)
                .get_result::<i32>(&mut conn)
                .map_err(map_diesel_error)
        })
        .await
        .map_err(|err| UserPersistenceError::query(format!("blocking task failed: {err}")))??;

        Ok(UserId::new(id))
    }
}

#[cfg(test)]
mod tests {
    //! Insert and duplicate-email coverage against a real temporary store.

    use super::*;
    use crate::outbound::persistence::{PoolConfig, run_migrations};
    use tempfile::TempDir;

    fn temp_repository() -> (TempDir, DieselUserRepository) {
        let dir = tempfile::tempdir().expect("temp dir");
        let db_path = dir.path().join("users.db");
        let pool = DbPool::new(PoolConfig::new(db_path.to_string_lossy())).expect("build pool");
        run_migrations(&pool).expect("migrations");
        (dir, DieselUserRepository::new(pool))
    }

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser::try_from_parts(name, email).expect("valid user")
    }

    #[tokio::test]
    async fn insert_assigns_monotone_identifiers() {
        let (_dir, repo) = temp_repository();

        let first = repo.insert(&new_user("Ann", "ann@x.com")).await.expect("first insert");
        let second = repo.insert(&new_user("Ben", "ben@x.com")).await.expect("second insert");

        assert_eq!(first, UserId::new(1));
        assert_eq!(second, UserId::new(2));
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_email() {
        let (_dir, repo) = temp_repository();

        repo.insert(&new_user("Ann", "ann@x.com")).await.expect("first insert");
        let err = repo
            .insert(&new_user("Another Ann", "ann@x.com"))
            .await
            .expect_err("duplicate email must be rejected");

        assert_eq!(err, UserPersistenceError::DuplicateEmail);
    }
}
