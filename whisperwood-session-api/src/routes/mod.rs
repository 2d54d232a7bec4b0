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

//! Axum router configuration for the session API.

pub mod session;

use axum::{
    http::{header, HeaderValue},
    routing::post,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

/// Build the application router. Every response is marked `no-store` so
/// connection details are never cached.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/session", post(session::start_session))
        .route("/api/connection-details", post(session::start_session))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
