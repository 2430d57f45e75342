//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing::info;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::inbound::http::HttpState;
use backend::inbound::http::health::{HealthState, live, ready, welcome};
use backend::inbound::http::items::{post_item, search_items};
use backend::inbound::http::users::register;
use backend::outbound::persistence::{DbPool, DieselItemRepository, DieselUserRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the Diesel-backed repositories into the handler state.
fn build_http_state(pool: &DbPool) -> HttpState {
    HttpState::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselItemRepository::new(pool.clone())),
    )
}

/// Build and bind the HTTP server.
///
/// The caller marks the shared [`HealthState`] ready once this returns, so
/// readiness probes stay red until the socket is actually bound.
pub fn create_server(
    config: ServerConfig,
    health_state: web::Data<HealthState>,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config.db_pool));
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(health_state.clone())
            .app_data(http_state.clone())
            .wrap(Trace)
            .service(welcome)
            .service(register)
            .service(post_item)
            .service(search_items)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?;

    info!(%bind_addr, "server bound");
    Ok(server.run())
}
