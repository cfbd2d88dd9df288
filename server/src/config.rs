//! Configuration management via environment variables
//!
//! Builds a [`ServerConfig`] from `RECEIPTS_*` variables, falling back to the
//! defaults for anything unset or unparseable.

use receipt_processor_common::config::ServerConfig;

/// Bind address variable
pub const ENV_HOST: &str = "RECEIPTS_HOST";
/// Listen port variable
pub const ENV_PORT: &str = "RECEIPTS_PORT";
/// Auth toggle variable
pub const ENV_REQUIRE_AUTH: &str = "RECEIPTS_REQUIRE_AUTH";
/// Expected bearer token variable
pub const ENV_AUTH_TOKEN: &str = "RECEIPTS_AUTH_TOKEN";

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns `default` when the variable is unset or fails to parse.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Environment variable '{}' has an invalid value '{}', using default",
                name,
                raw
            );
            default
        }),
        Err(_) => default,
    }
}

/// Get a boolean flag from the environment
///
/// `true/1/yes/on` (case-insensitive) enable the flag.
pub fn get_env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| {
            matches!(
                value.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
        .unwrap_or(false)
}

/// Load the server configuration from environment variables
pub fn server_config_from_env() -> ServerConfig {
    let defaults = ServerConfig::default();
    ServerConfig {
        host: get_env_or(ENV_HOST, &defaults.host),
        port: get_env_parse(ENV_PORT, defaults.port),
        require_auth: get_env_flag(ENV_REQUIRE_AUTH),
        auth_token: get_env_or(ENV_AUTH_TOKEN, &defaults.auth_token),
    }
}
