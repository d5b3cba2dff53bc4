//! REST client for the Discogs database API.
//!
//! Wraps the search (`GET /database/search`) and release detail
//! (`GET /releases/{id}`) endpoints using [`reqwest`]. Every request carries
//! the personal access token as the `token` query parameter and a fixed
//! `User-Agent`, as Discogs requires.

use async_trait::async_trait;
use randomizer_core::catalog::ReleaseCatalog;
use randomizer_core::filters::SearchQuery;
use randomizer_core::release::{ReleaseDetail, SearchPage};
use reqwest::header::USER_AGENT;

use crate::error::DiscogsError;

/// Production Discogs API root.
pub const DEFAULT_BASE_URL: &str = "https://api.discogs.com";

/// Identifying client header sent with every request.
pub const DEFAULT_USER_AGENT: &str = "DiscogsRandomizer/1.0";

/// Connection settings for [`DiscogsClient`].
#[derive(Clone)]
pub struct DiscogsConfig {
    /// Personal access token.
    pub token: String,
    pub base_url: String,
    pub user_agent: String,
}

impl DiscogsConfig {
    /// Settings for the public API with the default user agent.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl std::fmt::Debug for DiscogsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscogsConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// HTTP client for the Discogs API.
pub struct DiscogsClient {
    client: reqwest::Client,
    config: DiscogsConfig,
}

impl DiscogsClient {
    pub fn new(config: DiscogsConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: DiscogsConfig) -> Self {
        Self { client, config }
    }

    /// Run a database search.
    ///
    /// Sends `GET /database/search` with the resolved query pairs. `page` is
    /// appended when set; the count lookup leaves it out.
    pub async fn search_page(
        &self,
        query: &SearchQuery,
        page: Option<u64>,
    ) -> Result<SearchPage, DiscogsError> {
        tracing::debug!(?page, "Discogs database search");

        let mut request = self.get("/database/search").query(query.pairs());
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }

        Self::parse_response(request.send().await?).await
    }

    /// Fetch a release by id (`GET /releases/{id}`).
    pub async fn release_detail(&self, id: u64) -> Result<ReleaseDetail, DiscogsError> {
        tracing::debug!(release_id = id, "Discogs release lookup");

        let response = self.get(&format!("/releases/{id}")).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Start an authenticated GET request for `path` under the base URL.
    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        self.client
            .get(url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .query(&[("token", self.config.token.as_str())])
    }

    /// Turn a non-2xx response into [`DiscogsError::Api`], keeping the body.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, DiscogsError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DiscogsError::from_response(status.as_u16(), body));
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, DiscogsError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ReleaseCatalog for DiscogsClient {
    type Error = DiscogsError;

    async fn search(
        &self,
        query: &SearchQuery,
        page: Option<u64>,
    ) -> Result<SearchPage, DiscogsError> {
        self.search_page(query, page).await
    }

    async fn release(&self, id: u64) -> Result<ReleaseDetail, DiscogsError> {
        self.release_detail(id).await
    }
}
