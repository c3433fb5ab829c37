//! HTTP client for the GraphQL transport
//!
//! Handles request construction, credential application, and response
//! classification. Exactly one status (200) counts as success; every other
//! status is surfaced with its code and raw body for diagnostics. Retry,
//! backoff, and rate limiting are deliberately absent: a single transport
//! failure ends the run.

use crate::auth::Credential;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, trace};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("saml-roster/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client carrying the credential and default headers
pub struct HttpClient {
    client: reqwest::Client,
    config: HttpClientConfig,
    credential: Option<Credential>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            config,
            credential: None,
        }
    }

    /// Attach a credential, applied to every request
    #[must_use]
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Check whether a credential is attached
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// POST a JSON body and decode the JSON response.
    ///
    /// Success is exactly HTTP 200. Any other status returns
    /// `Error::HttpStatus` with the raw body; a body that is not valid JSON
    /// returns `Error::JsonParse`.
    pub async fn post_json<T: DeserializeOwned>(&self, url: &str, body: &Value) -> Result<T> {
        let mut req = self.client.post(url).json(body);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref credential) = self.credential {
            req = credential.apply(req);
        }

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status != reqwest::StatusCode::OK {
            return Err(Error::http_status(status.as_u16(), text));
        }

        debug!("Request succeeded: POST {url}");
        trace!(body = %text, "raw response");

        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_credential", &self.credential.is_some())
            .finish_non_exhaustive()
    }
}
