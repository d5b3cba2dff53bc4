//! Abstraction over the upstream music catalog.

use async_trait::async_trait;

use crate::filters::SearchQuery;
use crate::release::{ReleaseDetail, SearchPage};

/// Read access to a release catalog with search and detail lookups.
///
/// Implemented by the Discogs HTTP client; tests substitute an in-memory
/// fake.
#[async_trait]
pub trait ReleaseCatalog: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run a search. `page` is `None` for the initial count lookup.
    async fn search(
        &self,
        query: &SearchQuery,
        page: Option<u64>,
    ) -> Result<SearchPage, Self::Error>;

    /// Fetch the full detail record for a release.
    async fn release(&self, id: u64) -> Result<ReleaseDetail, Self::Error>;
}
