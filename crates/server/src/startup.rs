use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use service::assets::AssetUrls;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

// The client application is served from another origin.
fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Connect the pool, optionally migrate, and build the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.auto_migrate {
        models::db::migrate(&db).await?;
    }
    let urls = AssetUrls::from_config(&cfg.assets);
    info!(asset_base = urls.base(), "asset urls configured");
    let state = ServerState::new(db, urls);
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: serve until `shutdown` resolves, then drain in-flight
/// requests. The connection pool is dropped with the router.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server drained");
    Ok(())
}
