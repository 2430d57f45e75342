//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of the domain repository
//! ports backed by an embedded SQLite database via Diesel with `r2d2`
//! connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are implementation details, never exposed to
//!   the domain layer.
//! - **Blocking off the executor**: Diesel's SQLite driver is synchronous,
//!   so every query runs inside `tokio::task::spawn_blocking` with a
//!   connection checked out from the pool for the duration of that one
//!   operation.
//! - **Strongly typed errors**: database errors are mapped to the domain
//!   persistence error enums; unique and foreign key violations surface as
//!   their dedicated variants.

mod diesel_item_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_item_repository::DieselItemRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError, run_migrations};
