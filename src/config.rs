//! Persistent settings
//!
//! Credentials and client settings live in a TOML file (see [`crate::paths`]).
//! Environment variables take precedence over the file so credentials can
//! be injected without writing them to disk.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::{
    ClientConfig, Credentials, DEFAULT_ENDPOINT, DEFAULT_MAX_RESPONSE_BYTES, DEFAULT_TIMEOUT,
};
use crate::core::models::ConfigError;

/// Environment variable holding the app id
pub const APP_ID_ENV: &str = "MATHPIX_APP_ID";

/// Environment variable holding the app key
pub const APP_KEY_ENV: &str = "MATHPIX_APP_KEY";

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV: &str = "MATHPIX_ENDPOINT";

/// Contents of the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// API credentials
    #[serde(default)]
    pub credentials: CredentialSettings,
    /// Client tuning
    #[serde(default)]
    pub client: ClientSettings,
}

/// `[credentials]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSettings {
    /// Application id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Application key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_key: Option<String>,
}

/// `[client]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Recognition endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Response size limit in bytes
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

const fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve a client configuration, consulting the process environment
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        self.client_config_with(|key| std::env::var(key).ok())
    }

    /// Resolve a client configuration with a custom variable lookup
    ///
    /// Non-empty values from `lookup` override the file. Credentials are
    /// required; their absence is an error, never a silent default.
    pub fn client_config_with<F>(&self, lookup: F) -> Result<ClientConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let app_id = from_env(APP_ID_ENV).or_else(|| self.credentials.app_id.clone());
        let app_key = from_env(APP_KEY_ENV).or_else(|| self.credentials.app_key.clone());
        let (Some(app_id), Some(app_key)) = (app_id, app_key) else {
            return Err(ConfigError::MissingCredentials);
        };

        let endpoint = from_env(ENDPOINT_ENV).unwrap_or_else(|| self.client.endpoint.clone());

        Ok(ClientConfig::new(Credentials::new(app_id, app_key)?)
            .with_endpoint(endpoint)
            .with_timeout(Duration::from_secs(self.client.timeout_secs))
            .with_max_response_bytes(self.client.max_response_bytes))
    }

    /// Store a credential pair
    pub fn set_credentials(&mut self, app_id: impl Into<String>, app_key: impl Into<String>) {
        self.credentials.app_id = Some(app_id.into());
        self.credentials.app_key = Some(app_key.into());
    }
}

/// Mask a secret for display, keeping the last four characters
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{tail}", "*".repeat(count - 4))
}
