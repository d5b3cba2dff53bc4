//! Random sampling of search results until a release with videos turns up.
//!
//! One count lookup, then up to [`MAX_ATTEMPTS`] attempts. Each attempt
//! picks a random page, takes the first candidate on it and checks the
//! candidate's detail record for videos. A failing attempt is logged and
//! skipped; only the count lookup can fail the whole search.

use rand::Rng;

use crate::catalog::ReleaseCatalog;
use crate::filters::SearchQuery;
use crate::release::ReleaseDetail;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upstream only serves the first 10,000 items of any search.
pub const MAX_ACCESSIBLE_ITEMS: u64 = 10_000;

/// Upper bound on sample-and-verify attempts per request.
pub const MAX_ATTEMPTS: u32 = 10;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Result of a completed sampling run.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleOutcome {
    /// A release with at least one video was found.
    Found {
        release: ReleaseDetail,
        attempts: u32,
    },
    /// The search matched nothing.
    NoMatches,
    /// Every attempt came back without a video-bearing release.
    Exhausted { attempts: u32 },
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Pick a uniformly random page in `[1, min(total_items, MAX_ACCESSIBLE_ITEMS)]`.
///
/// `total_items` of zero is treated as one so the range is never empty.
pub fn pick_page<R: Rng>(total_items: u64, rng: &mut R) -> u64 {
    let usable = total_items.clamp(1, MAX_ACCESSIBLE_ITEMS);
    rng.random_range(1..=usable)
}

/// Search `catalog` for a random release that has videos.
///
/// Returns `Err` only when the initial count lookup fails. Errors inside an
/// attempt are logged at `warn` and the next attempt runs.
pub async fn find_release_with_videos<C, R>(
    catalog: &C,
    query: &SearchQuery,
    rng: &mut R,
) -> Result<SampleOutcome, C::Error>
where
    C: ReleaseCatalog + ?Sized,
    R: Rng + Send,
{
    let total_items = catalog.search(query, None).await?.pagination.items;
    tracing::debug!(total_items, "Search count resolved");

    if total_items == 0 {
        return Ok(SampleOutcome::NoMatches);
    }

    for attempt in 1..=MAX_ATTEMPTS {
        let page = pick_page(total_items, rng);

        match sample_page(catalog, query, page).await {
            Ok(Some(release)) => {
                tracing::info!(
                    attempt,
                    page,
                    title = release.title().unwrap_or_default(),
                    "Found release with videos"
                );
                return Ok(SampleOutcome::Found {
                    release,
                    attempts: attempt,
                });
            }
            Ok(None) => {
                tracing::debug!(attempt, page, "Sampled page had no release with videos");
            }
            Err(e) => {
                tracing::warn!(attempt, page, error = %e, "Sampling attempt failed");
            }
        }
    }

    tracing::info!(attempts = MAX_ATTEMPTS, "No release with videos found");
    Ok(SampleOutcome::Exhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// One attempt: fetch `page`, then the detail of its first candidate.
async fn sample_page<C>(
    catalog: &C,
    query: &SearchQuery,
    page: u64,
) -> Result<Option<ReleaseDetail>, C::Error>
where
    C: ReleaseCatalog + ?Sized,
{
    let Some(id) = catalog.search(query, Some(page)).await?.first_release_id() else {
        return Ok(None);
    };

    let release = catalog.release(id).await?;
    Ok(release.has_videos().then_some(release))
}
