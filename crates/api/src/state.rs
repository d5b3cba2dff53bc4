use std::sync::Arc;

use randomizer_discogs::DiscogsClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the client and its connection pool sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Discogs API client shared by all requests.
    pub discogs: Arc<DiscogsClient>,
}
