//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ItemRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub items: Arc<dyn ItemRepository>,
}

impl HttpState {
    /// Bundle the repository ports the handlers depend on.
    pub fn new(users: Arc<dyn UserRepository>, items: Arc<dyn ItemRepository>) -> Self {
        Self { users, items }
    }
}
