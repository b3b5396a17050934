//! Client credential resolution.
//!
//! The API key travels in every request URL, so it is kept in a wrapper
//! that never prints its value.

use super::types::ApiConfig;

/// Environment variable that overrides `api.client_id`.
pub const CLIENT_ID_ENV_VAR: &str = "PHOTO_BROWSER_CLIENT_ID";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building requests.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl ApiConfig {
    /// Resolve the client id, preferring the environment override.
    pub fn resolve_client_id(&self) -> Option<SecureString> {
        self.resolve_client_id_with(std::env::var(CLIENT_ID_ENV_VAR).ok())
    }

    /// Resolve against an explicit override value. Empty strings count as
    /// unset.
    pub fn resolve_client_id_with(&self, env_value: Option<String>) -> Option<SecureString> {
        env_value
            .filter(|value| !value.trim().is_empty())
            .or_else(|| {
                self.client_id
                    .clone()
                    .filter(|value| !value.trim().is_empty())
            })
            .map(SecureString::new)
    }
}
