use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router with a fresh, empty workout store.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = AppState::new(cfg.service.welcome_message.as_str());
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and serve until the listener fails
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg);
    let addr: SocketAddr = cfg.bind_addr().parse()?;
    info!(%addr, "starting workout store");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
