//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: all HTTP endpoints from the inbound layer plus the
//! request, response, and error schemas they reference. The generated
//! specification backs the Swagger UI mounted in debug builds.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lost & Found Community Hub API",
        description = "Register users, post lost or found items, and search postings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::items::post_item,
        crate::inbound::http::items::search_items,
        crate::inbound::http::health::welcome,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::Error,
        crate::domain::ErrorCode,
        crate::domain::ItemSummary,
        crate::domain::UserSummary,
        crate::inbound::http::users::RegisterRequest,
        crate::inbound::http::users::RegisterResponse,
        crate::inbound::http::items::PostItemRequest,
        crate::inbound::http::items::PostItemResponse,
    )),
    tags(
        (name = "users", description = "User registration"),
        (name = "items", description = "Item posting and search"),
        (name = "health", description = "Welcome banner and orchestration probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in ["/", "/register", "/post_item", "/search_items"] {
            assert!(paths.contains(&expected), "missing path: {expected}");
        }
    }
}
