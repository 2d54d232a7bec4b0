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

//! Shared API types for the Whisperwood session service.
//!
//! This crate defines the contract between the session service and its
//! consumers (the voice client, the transport platform that verifies tokens,
//! and integration tests). It is intentionally framework-agnostic: no axum,
//! no signing code.

pub mod chat;
pub mod requests;
pub mod responses;
pub mod token;

pub use requests::SessionRequest;
pub use responses::ConnectionDetails;
pub use token::AccessTokenClaims;
