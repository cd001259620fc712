use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over a fresh, empty store configured from `cfg`
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = AppState::in_memory(cfg.store.id_strategy);
    routes::build_router(state, build_cors())
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(cfg.server.bind_addr().parse()?)
}

/// Serve `app` on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "Server is running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // 每次启动都是全新的空集合，不做任何持久化
    let app = build_app(&cfg);
    let addr = bind_addr(&cfg)?;
    info!(%addr, id_strategy = ?cfg.store.id_strategy, "starting item service");
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app).await
}
