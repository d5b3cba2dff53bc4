//! Upstream response shapes used by the sampler.
//!
//! Only the fields the sampler reads are typed. The release detail is kept
//! as raw JSON so it can be returned to the caller unchanged.

use serde::{Deserialize, Serialize};

/// One page of catalog search results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    pub pagination: Pagination,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    /// Total number of items matching the query.
    pub items: u64,
}

/// Summary of a single search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
}

impl SearchPage {
    /// Identifier of the first result that carries one.
    pub fn first_release_id(&self) -> Option<u64> {
        self.results.iter().find_map(|r| r.id.filter(|id| *id != 0))
    }
}

/// Full release metadata, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseDetail(serde_json::Value);

impl ReleaseDetail {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Whether the release lists at least one video.
    pub fn has_videos(&self) -> bool {
        self.0
            .get("videos")
            .and_then(serde_json::Value::as_array)
            .is_some_and(|videos| !videos.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(serde_json::Value::as_str)
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}
