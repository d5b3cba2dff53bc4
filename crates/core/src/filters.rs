//! Caller-supplied search filters and their upstream query form.
//!
//! The filter set arrives as raw query-string values. It is turned into a
//! [`SearchQuery`] exactly once per request, which is where a decade prefix
//! gets resolved into a concrete year. Every attempt of the sampling loop
//! reuses that same query.

use rand::Rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Result type searched when the caller does not pass `type`.
pub const DEFAULT_RESULT_TYPE: &str = "release";

/// Format filter applied to every search.
pub const SEARCH_FORMAT: &str = "album";

/// Results per page. With one result per page, page number == item index.
pub const SEARCH_PAGE_SIZE: u32 = 1;

/// Length of a year value that is treated as a decade prefix (e.g. `198`).
pub const DECADE_PREFIX_LEN: usize = 3;

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Filters accepted on the random release endpoint.
///
/// All fields are optional. Empty strings are treated the same as absent
/// values, except for `type`, which is forwarded verbatim when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseFilters {
    pub genre: Option<String>,
    pub style: Option<String>,
    /// Either a full year (`1984`) or a decade prefix (`198`).
    pub year: Option<String>,
    pub country: Option<String>,
    /// Upstream result type (`type` on the wire).
    pub kind: Option<String>,
}

impl ReleaseFilters {
    /// Collect filters from raw query-string pairs.
    ///
    /// A repeated key keeps its last value. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filters = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "genre" => &mut filters.genre,
                "style" => &mut filters.style,
                "year" => &mut filters.year,
                "country" => &mut filters.country,
                "type" => &mut filters.kind,
                _ => continue,
            };
            *slot = Some(value);
        }
        filters
    }

    /// The upstream result type, defaulting to [`DEFAULT_RESULT_TYPE`].
    pub fn result_type(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_RESULT_TYPE)
    }

    /// Build the upstream search query for these filters.
    ///
    /// A decade prefix in `year` is resolved here with `rng`, so the caller
    /// must build the query once and reuse it for the whole request.
    pub fn to_search_query<R: Rng>(&self, rng: &mut R) -> SearchQuery {
        let mut pairs = vec![
            ("type", self.result_type().to_string()),
            ("format", SEARCH_FORMAT.to_string()),
            ("per_page", SEARCH_PAGE_SIZE.to_string()),
        ];

        for (key, value) in [
            ("genre", &self.genre),
            ("style", &self.style),
            ("country", &self.country),
        ] {
            if let Some(value) = non_empty(value) {
                pairs.push((key, value.to_string()));
            }
        }

        if let Some(year) = non_empty(&self.year) {
            pairs.push(("year", resolve_year(year, rng)));
        }

        SearchQuery { pairs }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Resolve a year filter into the value sent upstream.
///
/// A value of exactly [`DECADE_PREFIX_LEN`] characters gets one random digit
/// (0-9) appended. Anything else is returned unchanged.
pub fn resolve_year<R: Rng>(year: &str, rng: &mut R) -> String {
    if year.chars().count() != DECADE_PREFIX_LEN {
        return year.to_string();
    }
    let digit: u8 = rng.random_range(0..10);
    format!("{year}{digit}")
}

// ---------------------------------------------------------------------------
// Search query
// ---------------------------------------------------------------------------

/// Resolved upstream search parameters, in the order they are sent.
///
/// Does not include the credential or the page number; those are added by
/// the catalog client per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pairs: Vec<(&'static str, String)>,
}

impl SearchQuery {
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Look up the value sent for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}
