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

//! Handler for starting a voice session.

use axum::{body::Bytes, extract::State, Json};
use rand::Rng;
use whisperwood_session_types::{ConnectionDetails, SessionRequest};

use crate::error::AppError;
use crate::state::AppState;
use crate::token::{issue_participant_token, Participant, TokenError};

/// Identifiers are drawn from `[0, ID_RANGE)`. Collisions are possible
/// under concurrency.
const ID_RANGE: u32 = 10_000;

/// A fresh `(identity, room_name)` pair.
fn generate_session_ids() -> (String, String) {
    let mut rng = rand::thread_rng();
    let identity = format!("voice_user_{}", rng.gen_range(0..ID_RANGE));
    let room_name = format!("voice_room_{}", rng.gen_range(0..ID_RANGE));
    (identity, room_name)
}

/// Parse the request body. A blank body is an empty request whatever its
/// content type.
fn parse_request(body: &[u8]) -> Result<SessionRequest, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SessionRequest::default());
    }
    serde_json::from_slice(body)
}

/// POST /session
///
/// Mint connection details for a new room: a fresh participant identity and
/// room name, plus a token granting full participant rights in that room.
pub async fn start_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConnectionDetails>, AppError> {
    let credentials = state
        .livekit
        .credentials()
        .map_err(|e| state.internal_error(e))?;

    let request = parse_request(&body)
        .map_err(|e| state.internal_error(format!("Invalid session request: {e}")))?;
    let (identity, room_name) = generate_session_ids();
    let player_name = request.player_name();
    let agent_name = request.agent_name();

    let metadata = request
        .metadata
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| state.internal_error(TokenError::from(e)))?;

    let participant = Participant {
        identity: &identity,
        name: player_name,
        metadata: metadata.as_deref(),
    };
    let participant_token =
        issue_participant_token(&credentials, &participant, &room_name, agent_name)
            .map_err(|e| state.internal_error(e))?;

    tracing::info!(
        room = %room_name,
        identity = %identity,
        agent = agent_name.unwrap_or("-"),
        "Issued session token"
    );

    Ok(Json(ConnectionDetails {
        server_url: credentials.server_url.to_string(),
        room_name,
        participant_name: player_name.to_string(),
        participant_token,
    }))
}
