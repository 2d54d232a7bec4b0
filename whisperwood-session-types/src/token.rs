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

//! Access token (JWT) claims.
//!
//! The session service signs tokens with the transport platform's API
//! secret (HMAC-SHA256). The platform validates the signature when the
//! client joins the room; this service never verifies its own tokens.
//! These types describe the subset of the platform's claim layout that
//! Whisperwood relies on; unknown claims are ignored when decoding.

use serde::{Deserialize, Serialize};

/// JWT payload for a participant access token.
///
/// # Example payload
///
/// ```json
/// {
///   "iss": "APIkey123",
///   "sub": "voice_user_1234",
///   "name": "Sara",
///   "metadata": "{\"player_name\":\"Sara\"}",
///   "nbf": 1707004000,
///   "exp": 1707004900,
///   "video": {
///     "room": "voice_room_5678",
///     "roomJoin": true,
///     "canPublish": true,
///     "canPublishData": true,
///     "canSubscribe": true
///   },
///   "roomConfig": { "agents": [{ "agentName": "game-master" }] }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenClaims {
    /// API key the token was signed with.
    pub iss: String,

    /// Participant identity (unique within the room).
    pub sub: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Opaque participant metadata, usually a JSON document.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub metadata: String,

    /// Issuance time (Unix seconds). The token is not valid before this.
    pub nbf: i64,

    /// Expiration time (Unix seconds).
    pub exp: i64,

    pub video: VideoGrants,

    /// Present only when an agent should be dispatched into the room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_config: Option<RoomConfiguration>,
}

/// Room-scoped capabilities bound into an access token.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrants {
    pub room: String,
    #[serde(default)]
    pub room_join: bool,
    #[serde(default)]
    pub can_publish: bool,
    #[serde(default)]
    pub can_publish_data: bool,
    #[serde(default)]
    pub can_subscribe: bool,
}

/// Directive telling the platform which agent workers to dispatch into a
/// newly created room.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RoomConfiguration {
    #[serde(default)]
    pub agents: Vec<RoomAgentDispatch>,
}

impl RoomConfiguration {
    /// Configuration dispatching exactly one agent.
    pub fn with_agent(agent_name: &str) -> Self {
        Self {
            agents: vec![RoomAgentDispatch {
                agent_name: agent_name.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomAgentDispatch {
    pub agent_name: String,
}
