//! Backend entry-point: wires the REST endpoints over the embedded store.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::ServerConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "lost_and_found.db".to_owned());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());
    let bind_addr: SocketAddr = bind_addr
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let pool = DbPool::new(PoolConfig::new(database_url.as_str()))
        .map_err(std::io::Error::other)?;
    // Schema failures are fatal: the process must not serve requests
    // against a store without the tables and constraints in place.
    run_migrations(&pool).map_err(std::io::Error::other)?;
    info!(database = %database_url, "database initialised");

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(ServerConfig::new(bind_addr, pool), health_state.clone())?;
    health_state.mark_ready();
    server.await
}
