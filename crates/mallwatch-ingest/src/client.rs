//! HTTP client for mall tenant APIs.

use std::time::Duration;

use reqwest::Client;

use mallwatch_core::Point;

use crate::error::IngestError;
use crate::sources::Source;

/// Thin wrapper around `reqwest::Client` with a uniform request timeout and
/// User-Agent across vendor sources.
///
/// Fetch failures are fatal to the caller's run by design: a run that cannot
/// produce a fresh tenant list has nothing meaningful to diff, so no
/// fallback or retry happens here.
pub struct MallClient {
    client: Client,
}

impl MallClient {
    /// Creates a client with the given request timeout and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the current tenant list from `source` and maps it into
    /// `Point`s, stamping each with `parsing_date`.
    ///
    /// `base_url` overrides the source's production endpoint; pass `None`
    /// outside of tests. An empty tenant list is a valid result — a mall
    /// with nothing listed is not a fetch failure.
    ///
    /// # Errors
    ///
    /// - [`IngestError::Http`] — network failure or timeout.
    /// - [`IngestError::UnexpectedStatus`] — any non-2xx response.
    /// - [`IngestError::Deserialize`] — response body is not valid JSON.
    /// - [`IngestError::MissingPayload`] — JSON decoded but the vendor's
    ///   expected envelope field is absent.
    pub async fn fetch_points(
        &self,
        source: Source,
        base_url: Option<&str>,
        parsing_date: &str,
    ) -> Result<Vec<Point>, IngestError> {
        let base = base_url.unwrap_or_else(|| source.default_base_url());
        let url = source.endpoint_url(base);

        tracing::debug!(source = %source, url, "fetching tenant list");
        let payload = self.fetch_json(&url).await?;
        let points = source.parse_points(&payload, &url, parsing_date)?;
        tracing::info!(source = %source, count = points.len(), "tenant list fetched");
        Ok(points)
    }

    /// Performs a GET and decodes the body as JSON.
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, IngestError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(IngestError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| IngestError::Deserialize {
            context: format!("tenant list from {url}"),
            source: e,
        })
    }
}
