/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Whisperwood session API server entry point.
//!
//! A standalone Axum service that issues short-lived room access tokens
//! for the real-time platform and tells the client where to connect.

use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;
use whisperwood_session_api::config::Config;
use whisperwood_session_api::routes;
use whisperwood_session_api::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().expect("failed to load configuration");

    if let Err(e) = config.livekit.credentials() {
        tracing::warn!("{e}; session requests will fail until it is set");
    }
    if config.expose_error_details {
        tracing::warn!("Error details are returned to clients (EXPOSE_ERROR_DETAILS=true)");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::new(&config);
    let app = routes::router().layer(cors).with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind listener");

    tracing::info!("Session API listening on {}", config.listen_addr);

    axum::serve(listener, app).await.expect("server error");
}
