use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use randomizer_discogs::DiscogsError;
use serde_json::json;

/// Message returned when Discogs rate-limits us.
pub const RATE_LIMITED_MESSAGE: &str = "Discogs rate limit exceeded. Please wait a moment.";

/// Message returned when Discogs fails without an error message of its own.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch from Discogs.";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{ "error": <message> }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The endpoint only accepts GET.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The search matched no releases at all.
    #[error("No releases found with these filters.")]
    NoReleasesFound,

    /// Every sampling attempt came back without a video-bearing release.
    #[error(
        "Could not find a release with YouTube links after several attempts. Try different filters."
    )]
    NoVideoRelease,

    /// A failure from the Discogs API that escaped the sampling loop.
    #[error(transparent)]
    Discogs(#[from] DiscogsError),

    /// The request ran past the server-wide timeout.
    #[error("Request timed out.")]
    Timeout,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::NoReleasesFound | AppError::NoVideoRelease => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Discogs(err) => classify_discogs_error(err),
            AppError::Timeout => (StatusCode::REQUEST_TIMEOUT, self.to_string()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a Discogs error into an HTTP status and message.
///
/// - A rate-limit signal maps to 429.
/// - Everything else maps to 500, passing through the Discogs message when
///   there is one.
fn classify_discogs_error(err: &DiscogsError) -> (StatusCode, String) {
    tracing::error!(error = %err, "Discogs API error");

    if err.is_rate_limited() {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            RATE_LIMITED_MESSAGE.to_string(),
        );
    }

    let message = err.upstream_message().unwrap_or(UPSTREAM_FAILURE_MESSAGE);
    (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
}
