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

//! Application configuration loaded from environment variables.

use std::env;

use thiserror::Error;

pub const LIVEKIT_URL: &str = "LIVEKIT_URL";
pub const LIVEKIT_API_KEY: &str = "LIVEKIT_API_KEY";
pub const LIVEKIT_API_SECRET: &str = "LIVEKIT_API_SECRET";

/// Configuration for the session service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8080").
    pub listen_addr: String,
    /// Real-time platform connection settings.
    pub livekit: LiveKitConfig,
    /// Echo detailed error messages to clients (default: true).
    pub expose_error_details: bool,
}

/// Real-time platform settings. Each value may be absent at startup; a
/// missing value only fails the requests that need it.
#[derive(Debug, Clone, Default)]
pub struct LiveKitConfig {
    pub server_url: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

/// Borrowed view of a complete [`LiveKitConfig`].
#[derive(Debug, Clone, Copy)]
pub struct LiveKitCredentials<'a> {
    pub server_url: &'a str,
    pub api_key: &'a str,
    pub api_secret: &'a str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not defined")]
    Missing(&'static str),
}

impl LiveKitConfig {
    /// Resolve all three settings, failing on the first one that is missing.
    pub fn credentials(&self) -> Result<LiveKitCredentials<'_>, ConfigError> {
        let server_url = self
            .server_url
            .as_deref()
            .ok_or(ConfigError::Missing(LIVEKIT_URL))?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ConfigError::Missing(LIVEKIT_API_KEY))?;
        let api_secret = self
            .api_secret
            .as_deref()
            .ok_or(ConfigError::Missing(LIVEKIT_API_SECRET))?;
        Ok(LiveKitCredentials {
            server_url,
            api_key,
            api_secret,
        })
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required at request time
    /// - `LIVEKIT_URL`
    /// - `LIVEKIT_API_KEY`
    /// - `LIVEKIT_API_SECRET`
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8080"`)
    /// - `EXPOSE_ERROR_DETAILS` (default: `"true"`)
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|s| !s.is_empty());

        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let expose_error_details = get("EXPOSE_ERROR_DETAILS")
            .unwrap_or_else(|| "true".to_string())
            .parse::<bool>()
            .map_err(|_| "EXPOSE_ERROR_DETAILS must be \"true\" or \"false\"")?;

        Ok(Self {
            listen_addr,
            livekit: LiveKitConfig {
                server_url: get(LIVEKIT_URL),
                api_key: get(LIVEKIT_API_KEY),
                api_secret: get(LIVEKIT_API_SECRET),
            },
            expose_error_details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_values_unset() {
        let config = Config::from_lookup(lookup_from(&[])).expect("should load");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert!(config.expose_error_details);
        assert!(config.livekit.server_url.is_none());
    }

    #[test]
    fn complete_livekit_config_resolves_credentials() {
        let config = Config::from_lookup(lookup_from(&[
            (LIVEKIT_URL, "wss://example.livekit.cloud"),
            (LIVEKIT_API_KEY, "key"),
            (LIVEKIT_API_SECRET, "secret"),
        ]))
        .expect("should load");

        let creds = config.livekit.credentials().expect("complete");
        assert_eq!(creds.server_url, "wss://example.livekit.cloud");
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.api_secret, "secret");
    }

    #[test]
    fn each_missing_value_is_reported_by_name() {
        let full = [
            (LIVEKIT_URL, "wss://x"),
            (LIVEKIT_API_KEY, "key"),
            (LIVEKIT_API_SECRET, "secret"),
        ];
        for missing in [LIVEKIT_URL, LIVEKIT_API_KEY, LIVEKIT_API_SECRET] {
            let pairs: Vec<_> = full.iter().copied().filter(|(k, _)| *k != missing).collect();
            let config = Config::from_lookup(lookup_from(&pairs)).expect("should load");
            let err = config.livekit.credentials().unwrap_err();
            assert_eq!(err, ConfigError::Missing(missing));
            assert_eq!(err.to_string(), format!("{missing} is not defined"));
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let config = Config::from_lookup(lookup_from(&[
            (LIVEKIT_URL, "wss://x"),
            (LIVEKIT_API_KEY, ""),
            (LIVEKIT_API_SECRET, "secret"),
        ]))
        .expect("should load");
        assert_eq!(
            config.livekit.credentials().unwrap_err(),
            ConfigError::Missing(LIVEKIT_API_KEY)
        );
    }

    #[test]
    fn invalid_expose_flag_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("EXPOSE_ERROR_DETAILS", "maybe")]))
            .unwrap_err();
        assert!(err.contains("EXPOSE_ERROR_DETAILS"));
    }

    #[test]
    #[serial]
    fn from_env_reads_process_environment() {
        env::set_var("LISTEN_ADDR", "127.0.0.1:9999");
        env::set_var("EXPOSE_ERROR_DETAILS", "false");
        let config = Config::from_env().expect("should load");
        env::remove_var("LISTEN_ADDR");
        env::remove_var("EXPOSE_ERROR_DETAILS");

        assert_eq!(config.listen_addr, "127.0.0.1:9999");
        assert!(!config.expose_error_details);
    }
}
