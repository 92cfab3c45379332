//! Client configuration
//!
//! Everything a [`RecognitionClient`](super::RecognitionClient) needs is
//! passed in explicitly; there is no process-wide state, so independently
//! configured clients can coexist.

use std::time::Duration;

use crate::core::models::ConfigError;

/// Default recognition endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.mathpix.com/v3/latex";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Largest response body accepted before it is treated as incorrect data
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 10 * 1024 * 1024;

/// Application id / key pair sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    app_id: String,
    app_key: String,
}

impl Credentials {
    /// Validate and wrap an app id / key pair
    ///
    /// Both values must be non-empty and made of visible ASCII so they can
    /// travel as HTTP header values.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        let app_key = app_key.into();
        validate("app_id", &app_id)?;
        validate("app_key", &app_key)?;
        Ok(Self { app_id, app_key })
    }

    /// The application id
    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The application key
    #[must_use]
    pub fn app_key(&self) -> &str {
        &self.app_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}

fn validate(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidCredentials {
            field,
            reason: "must not be empty",
        });
    }
    if !value.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(ConfigError::InvalidCredentials {
            field,
            reason: "must be visible ASCII without spaces",
        });
    }
    Ok(())
}

/// Settings for one recognition client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// App id / key pair
    pub credentials: Credentials,
    /// Recognition endpoint URL
    pub endpoint: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Response size limit
    pub max_response_bytes: usize,
}

impl ClientConfig {
    /// Configuration with default endpoint and limits
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }

    /// Override the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the response size limit
    #[must_use]
    pub fn with_max_response_bytes(mut self, max: usize) -> Self {
        self.max_response_bytes = max;
        self
    }
}
