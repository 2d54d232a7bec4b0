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

//! Response types for the session service.

use serde::{Deserialize, Serialize};

/// Success payload for `POST /session`.
///
/// Field names are camelCase because the voice client hands this object
/// straight to the transport SDK.
///
/// ```json
/// {
///   "serverUrl": "wss://whisperwood.livekit.cloud",
///   "roomName": "voice_room_4821",
///   "participantName": "Sara",
///   "participantToken": "eyJhbGciOiJIUzI1NiJ9..."
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDetails {
    pub server_url: String,
    pub room_name: String,
    pub participant_name: String,
    pub participant_token: String,
}
