//! HTTP transport adapter
//!
//! Sends request bodies to the recognition endpoint with reqwest and
//! reports failures as [`NetworkError`] kinds.
//!
//! - [`classify`] - Reduce transport errors to network error kinds

pub mod classify;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::client::ClientConfig;
use crate::core::models::{ConfigError, NetworkError};

pub use classify::{TransportFault, classify_io_kind};

/// reqwest-backed transport for one endpoint and credential pair
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    app_id: String,
    app_key: String,
    max_response_bytes: usize,
}

impl HttpTransport {
    /// Build a transport from client settings
    ///
    /// The underlying client keeps no cookie store and applies the
    /// configured timeout to the whole request.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            app_id: config.credentials.app_id().to_string(),
            app_key: config.credentials.app_key().to_string(),
            max_response_bytes: config.max_response_bytes,
        })
    }

    /// The endpoint requests are posted to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a JSON body and collect the response body
    ///
    /// Non-success HTTP statuses are not errors here: the server reports
    /// its own failures inside the body.
    pub async fn post(&self, body: Vec<u8>) -> Result<Vec<u8>, NetworkError> {
        let mut response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header("app_id", &self.app_id)
            .header("app_key", &self.app_key)
            .body(body)
            .send()
            .await
            .map_err(|e| NetworkError::from(&e))?;

        log::debug!("response status {} from {}", response.status(), self.endpoint);

        let mut collected = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| NetworkError::from(&e))? {
            if collected.len() + chunk.len() > self.max_response_bytes {
                log::debug!("response exceeded {} bytes, discarding", self.max_response_bytes);
                return Err(NetworkError::IncorrectDataReturned);
            }
            collected.extend_from_slice(&chunk);
        }
        Ok(collected)
    }
}
