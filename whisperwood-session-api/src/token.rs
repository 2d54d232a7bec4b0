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

//! Participant access token generation.
//!
//! Tokens are built with the platform's own `livekit-api` access token
//! builder and signed with the API secret (HS256); the platform validates
//! the signature and the grant when the client joins.

use std::time::Duration;

use livekit_api::access_token::{AccessToken, AccessTokenError, VideoGrants};
use thiserror::Error;
use whisperwood_session_types::token::RoomConfiguration;

use crate::config::LiveKitCredentials;

/// Lifetime of every participant token.
pub const TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("participant identity is required")]
    MissingIdentity,

    #[error("failed to serialize participant metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("failed to build room configuration: {0}")]
    RoomConfig(serde_json::Error),

    #[error("failed to sign access token: {0}")]
    Signing(#[from] AccessTokenError),
}

/// Who the token is for.
#[derive(Debug, Clone, Copy)]
pub struct Participant<'a> {
    pub identity: &'a str,
    pub name: &'a str,
    /// Already-serialized metadata; passed through without interpretation.
    pub metadata: Option<&'a str>,
}

/// The grant every Whisperwood participant receives: join, publish media,
/// publish data and subscribe, all scoped to `room_name`.
pub fn participant_grants(room_name: &str) -> VideoGrants {
    VideoGrants {
        room: room_name.to_string(),
        room_join: true,
        can_publish: true,
        can_publish_data: true,
        can_subscribe: true,
        ..Default::default()
    }
}

/// Sign a token that lets `participant` join `room_name` with the full
/// participant grant, dispatching `agent_name` into the room when given.
pub fn issue_participant_token(
    credentials: &LiveKitCredentials<'_>,
    participant: &Participant<'_>,
    room_name: &str,
    agent_name: Option<&str>,
) -> Result<String, TokenError> {
    if participant.identity.is_empty() {
        return Err(TokenError::MissingIdentity);
    }

    let mut token = AccessToken::with_api_key(credentials.api_key, credentials.api_secret)
        .with_identity(participant.identity)
        .with_name(participant.name)
        .with_ttl(TOKEN_TTL)
        .with_grants(participant_grants(room_name));

    if let Some(metadata) = participant.metadata {
        token = token.with_metadata(metadata);
    }
    if let Some(agent) = agent_name {
        // The platform's room configuration shares the wire layout of
        // `RoomConfiguration`, so convert through its JSON form.
        let directive = serde_json::to_value(RoomConfiguration::with_agent(agent))
            .and_then(serde_json::from_value)
            .map_err(TokenError::RoomConfig)?;
        token = token.with_room_config(directive);
    }

    Ok(token.to_jwt()?)
}
