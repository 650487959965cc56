//! Main entry point for the newsletter dashboard gateway.
//!
//! This file initializes the Axum web server, builds the shared upstream
//! client and fixture stores, and registers all API routes.
//! It orchestrates the application's startup and defines its overall structure.

use gateway::config::Config;
use gateway::{AppState, build_router};
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let server_port = config.server_port;
    let state = AppState::new(config).unwrap();

    let app = build_router(state);

    let bind_address = format!("0.0.0.0:{}", server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting newsletter gateway on port {}", server_port);
    axum::serve(listener, app).await.unwrap();
}
