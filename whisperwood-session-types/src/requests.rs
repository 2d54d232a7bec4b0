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

//! Request types for the session service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display name used when the request metadata carries no `player_name`.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Request body for `POST /session`.
///
/// Every field is optional; an empty object starts an agent-less session for
/// a player called [`DEFAULT_PLAYER_NAME`].
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SessionRequest {
    /// Opaque participant metadata. Serialized verbatim into the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    /// Room configuration requested by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_config: Option<RoomConfigRequest>,
}

impl SessionRequest {
    /// The `player_name` string inside `metadata`, or [`DEFAULT_PLAYER_NAME`].
    pub fn player_name(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.get("player_name"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PLAYER_NAME)
    }

    /// Name of the first agent the client asked to dispatch, if any. A
    /// first entry without a non-empty name means no agent.
    pub fn agent_name(&self) -> Option<&str> {
        self.room_config
            .as_ref()
            .and_then(|rc| rc.agents.as_deref())
            .and_then(<[AgentRequest]>::first)
            .and_then(|a| a.agent_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// `room_config` section of a [`SessionRequest`].
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RoomConfigRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<AgentRequest>>,
}

/// A single agent worker the client wants dispatched into its room.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AgentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
}
