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

//! Shared application state passed to every Axum handler via `State`.

use std::fmt::Display;
use std::sync::Arc;

use crate::config::{Config, LiveKitConfig};
use crate::error::AppError;

/// Application state shared across all request handlers. Read-only after
/// startup.
#[derive(Clone)]
pub struct AppState {
    /// Real-time platform URL and signing credentials.
    pub livekit: Arc<LiveKitConfig>,
    /// Whether internal error messages are echoed to clients.
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            livekit: Arc::new(config.livekit.clone()),
            expose_error_details: config.expose_error_details,
        }
    }

    /// Log `err` and turn it into a 500 response, redacted unless
    /// `expose_error_details` is set.
    pub fn internal_error(&self, err: impl Display) -> AppError {
        let detail = err.to_string();
        tracing::error!("Failed to start session: {detail}");
        if self.expose_error_details {
            AppError::internal(&detail)
        } else {
            AppError::internal(AppError::GENERIC_MESSAGE)
        }
    }
}
