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

//! Integration tests verifying that incomplete platform configuration fails
//! every session request without issuing a token.


use axum::http::{header, StatusCode};
use test_helpers::*;
use tower::ServiceExt;
use whisperwood_session_api::config::LiveKitConfig;

async fn assert_fails_with(livekit: LiveKitConfig, expected_message: &str) {
    let app = build_app_with(livekit, true);
    let resp = app
        .oneshot(session_request(r#"{"metadata":{"player_name":"Sara"}}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.headers()[header::CACHE_CONTROL], "no-store");
    let body = response_text(resp).await;
    assert_eq!(body, expected_message);
    assert!(!body.contains("participantToken"));
}

#[tokio::test]
async fn test_missing_server_url_fails() {
    let livekit = LiveKitConfig {
        server_url: None,
        ..full_livekit_config()
    };
    assert_fails_with(livekit, "LIVEKIT_URL is not defined").await;
}

#[tokio::test]
async fn test_missing_api_key_fails() {
    let livekit = LiveKitConfig {
        api_key: None,
        ..full_livekit_config()
    };
    assert_fails_with(livekit, "LIVEKIT_API_KEY is not defined").await;
}

#[tokio::test]
async fn test_missing_api_secret_fails() {
    let livekit = LiveKitConfig {
        api_secret: None,
        ..full_livekit_config()
    };
    assert_fails_with(livekit, "LIVEKIT_API_SECRET is not defined").await;
}

#[tokio::test]
async fn test_missing_config_wins_over_malformed_body() {
    let app = build_app_with(LiveKitConfig::default(), true);
    let resp = app.oneshot(session_request("{not json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_redacted_errors_hide_detail() {
    let livekit = LiveKitConfig {
        api_secret: None,
        ..full_livekit_config()
    };
    let app = build_app_with(livekit, false);
    let resp = app.oneshot(session_request("{}")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response_text(resp).await, "Internal server error");
}
