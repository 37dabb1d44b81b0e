//! Backend entry-point: wires REST endpoints and OpenAPI docs.

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{create_server, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::other(format!("configuration error: {e}")))?;

    let pool = DbPool::new(PoolConfig::new(config.database_url()))
        .await
        .map_err(|e| std::io::Error::other(format!("database pool error: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, pool, &config)?;

    server.await
}
