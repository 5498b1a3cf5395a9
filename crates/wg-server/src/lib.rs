//! Widget embed HTTP API (Axum).
//!
//! Builds share links for widget configurations and resolves the settings an
//! embed page should render from its query string.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;
use wg_core::EmbedConfig;

/// Build the application router with the default configuration.
pub fn app() -> Router {
    let state = AppState::new();
    app_with_state(state)
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::api_routes())
        .merge(routes::embed_routes(&state.config.route_prefix))
        .with_state(state)
}

/// Bind to the configured host and port and serve until the process exits.
pub async fn serve(config: EmbedConfig) -> anyhow::Result<()> {
    config.validate()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "widget embed server listening");
    axum::serve(listener, app_with_state(AppState::with_config(config))).await?;
    Ok(())
}
