//! Book catalog API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Form-urlencoded query escaping via `url`
//! - Status handling that separates transport, status and parse failures
//!
//! There is no retry, cache or rate limiter: one call to
//! [`CatalogClient::fetch_volumes`] is exactly one outbound request.

use reqwest::Client;
use url::Url;

use crate::config::{Config, api};
use crate::error::{SearchError, SearchResult};
use crate::models::VolumesResponse;

/// Catalog API client.
#[derive(Clone)]
pub struct CatalogClient {
    /// Pooled HTTP client.
    client: Client,

    /// Volumes endpoint.
    catalog_url: Url,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the catalog URL is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let catalog_url = Url::parse(&config.catalog_url)?;
        if !matches!(catalog_url.scheme(), "http" | "https") {
            anyhow::bail!("catalog URL must be http or https, got {}", catalog_url.scheme());
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(api::USER_AGENT)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { client: builder.build()?, catalog_url })
    }

    /// The configured volumes endpoint.
    #[must_use]
    pub fn catalog_url(&self) -> &Url {
        &self.catalog_url
    }

    /// Build the request URL for a query.
    ///
    /// Any query string already on the endpoint is kept and `q` is appended.
    #[must_use]
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.catalog_url.clone();
        url.query_pairs_mut().append_pair(api::QUERY_PARAM, query);
        url
    }

    /// Fetch the raw volumes response for a query.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] on transport failure, [`SearchError::Status`]
    /// on a non-2xx answer and [`SearchError::Parse`] when the body is not the
    /// expected JSON.
    pub async fn fetch_volumes(&self, query: &str) -> SearchResult<VolumesResponse> {
        let url = self.request_url(query);
        tracing::debug!(url = %url, "Requesting volumes");

        let response = self.client.get(url).send().await?;
        let response = Self::handle_response(response).await?;

        let body = response.bytes().await?;
        tracing::debug!(bytes = body.len(), "Received volumes body");

        serde_json::from_slice(&body).map_err(SearchError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> SearchResult<reqwest::Response> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Catalog responded");

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(SearchError::status(status.as_u16(), text))
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient").field("catalog_url", &self.catalog_url.as_str()).finish()
    }
}
