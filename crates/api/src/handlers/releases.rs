//! Handlers for the random release endpoint.

use axum::extract::{Query, State};
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use randomizer_core::filters::ReleaseFilters;
use randomizer_core::sampler::{find_release_with_videos, SampleOutcome};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /random-release
///
/// Sample Discogs search results matching the filters until a release with
/// at least one video is found, and return its full detail record verbatim.
///
/// The query string is taken as raw pairs so a repeated key resolves to its
/// last value instead of failing extraction.
pub async fn random_release(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<serde_json::Value>> {
    let filters = ReleaseFilters::from_pairs(pairs);
    tracing::info!(
        genre = ?filters.genre,
        style = ?filters.style,
        year = ?filters.year,
        country = ?filters.country,
        result_type = filters.result_type(),
        "Searching for random release"
    );

    let mut rng = StdRng::from_rng(&mut rand::rng());
    let query = filters.to_search_query(&mut rng);

    match find_release_with_videos(state.discogs.as_ref(), &query, &mut rng).await? {
        SampleOutcome::Found { release, .. } => Ok(Json(release.into_inner())),
        SampleOutcome::NoMatches => Err(AppError::NoReleasesFound),
        SampleOutcome::Exhausted { .. } => Err(AppError::NoVideoRelease),
    }
}

/// Any method other than GET on the random release endpoint.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
