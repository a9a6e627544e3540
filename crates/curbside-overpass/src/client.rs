//! HTTP client for the Overpass interpreter endpoint.

use std::time::Duration;

use reqwest::Client;

use crate::error::OverpassError;
use crate::types::{OverpassElement, OverpassResponse};

/// Client for a single Overpass interpreter endpoint.
///
/// Queries are POSTed as a literal Overpass QL body. One instance is meant
/// to be built at startup from [`curbside_core::AppConfig`] and shared; it
/// holds no per-run state.
pub struct OverpassClient {
    client: Client,
    base_url: String,
}

impl OverpassClient {
    /// Creates a client with the configured timeout and `User-Agent`.
    ///
    /// The timeout caps each interpreter round-trip; there is no retry, a
    /// timed-out query surfaces as [`OverpassError::Http`] to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        base_url: impl Into<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// POST one query and return the response elements.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::UnexpectedStatus`] — any non-2xx status.
    /// - [`OverpassError::Http`] — network failure or timeout.
    /// - [`OverpassError::Deserialize`] — body is not a valid interpreter
    ///   response.
    pub async fn fetch_elements(&self, query: &str) -> Result<Vec<OverpassElement>, OverpassError> {
        let response = self
            .client
            .post(&self.base_url)
            .body(query.to_owned())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.base_url.clone(),
            });
        }

        let body = response.text().await?;
        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|source| OverpassError::Deserialize {
                context: format!("interpreter response from {}", self.base_url),
                source,
            })?;
        Ok(parsed.elements)
    }
}
