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

//! Chat transcript records.
//!
//! Messages are produced by the transport platform's chat stream and
//! rendered by the client transcript. The session service only publishes
//! the shape so every consumer agrees on it.

use serde::{Deserialize, Serialize};

/// One entry of the ordered chat stream.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub from: ChatSender,
    pub message: String,
    /// Unix timestamp in milliseconds of the last edit, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_timestamp: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSender {
    /// `true` when the local player sent the message, `false` for the
    /// Game Master or any other remote participant.
    pub is_local: bool,
}
