use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, Mode};
use service::users::{repo::InMemoryUserRepository, UserService};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

/// Service backed by a freshly seeded in-memory collection.
pub fn seeded_users() -> UserService {
    UserService::new(Arc::new(InMemoryUserRepository::seeded()))
}

/// Build the router without opening any listener.
pub fn build_app(config: &AppConfig, users: UserService) -> Router {
    let state = ServerState { users, config: Arc::new(config.clone()) };
    routes::build_router(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Serve `app` on an already bound listener until Ctrl+C.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Public entry: build the app and, outside test mode, run the HTTP server
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&config, seeded_users());

    if config.mode == Mode::Test {
        info!(mode = %config.mode, "test mode; listener not opened");
        return Ok(());
    }

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, mode = %config.mode, "Server running on port {}", config.port);
    serve(listener, app).await
}
