//! Route definitions for the random release endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::releases;
use crate::state::AppState;

/// Random release routes.
///
/// ```text
/// GET  /random-release  -> random_release
/// *    /random-release  -> method_not_allowed (405)
/// ```
///
/// HEAD is routed explicitly; axum would otherwise serve it with the GET
/// handler.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/random-release",
        get(releases::random_release)
            .head(releases::method_not_allowed)
            .fallback(releases::method_not_allowed),
    )
}
