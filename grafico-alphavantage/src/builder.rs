use std::time::Duration;

use crate::AvConnector;

/// Environment variable consulted for the API key when none is injected.
pub const API_KEY_ENV: &str = "GRAFICO_ALPHAVANTAGE_API_KEY";

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Builder for [`AvConnector`].
///
/// Behavior and trade-offs:
/// - Without an explicit key, the builder reads [`API_KEY_ENV`] and falls
///   back to the upstream `"demo"` key. A missing credential therefore
///   degrades the remote calls (the demo key only serves a handful of
///   symbols) instead of failing construction.
/// - The base URL is overridable so tests can point the connector at a local
///   mock server; production users never need to touch it.
pub struct AvConnectorBuilder {
    api_key: Option<String>,
    base_url: String,
    client: Option<reqwest::Client>,
}

impl Default for AvConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AvConnectorBuilder {
    /// Create a builder with the production base URL and no explicit key.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            client: None,
        }
    }

    /// Inject an API key, bypassing the environment lookup.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point the connector at a different host (tests, proxies).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// Supply a pre-configured HTTP client.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Finalize the connector.
    #[must_use]
    pub fn build(self) -> AvConnector {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| "demo".to_owned());
        let client = self.client.unwrap_or_else(|| {
            reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("failed to build reqwest client for AvConnector")
        });
        AvConnector::from_parts(client, self.base_url, api_key)
    }
}
