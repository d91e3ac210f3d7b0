//! Connection settings for the backend client.

use std::fmt;

/// Where the server lives and how to authenticate against it.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the server, e.g. `http://localhost:8096`.
    pub endpoint: String,
    /// API key presented in the `Authorization` header.
    pub api_token: String,
}

impl ClientConfig {
    /// Creates a new configuration.
    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_token: api_token.into(),
        }
    }

    /// Base URL without trailing slashes.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }

    /// Value of the `Authorization` header sent with every request.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("MediaBrowser Token=\"{}\"", self.api_token)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}
