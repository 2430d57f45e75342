//! Lost & Found community hub backend.
//!
//! Users register with a unique email, post lost or found items, and search
//! postings by free-text match over title, description, and location.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware attaching a per-request trace identifier.
pub use middleware::trace::Trace;
