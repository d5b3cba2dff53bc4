pub mod health;
pub mod releases;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /random-release                                  GET only; other methods 405
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(releases::router())
}
