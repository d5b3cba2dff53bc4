//! Errors from the Discogs HTTP layer.

use serde::Deserialize;

/// Message Discogs sends when a client exceeds its request quota.
pub const RATE_LIMIT_MESSAGE: &str = "You are making requests too quickly.";

/// HTTP status Discogs uses for rate limiting.
const TOO_MANY_REQUESTS: u16 = 429;

/// Errors from the Discogs client.
#[derive(Debug, thiserror::Error)]
pub enum DiscogsError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    ///
    /// The URL is stripped on conversion since it carries the token.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Discogs returned a non-2xx status code.
    #[error("Discogs API error ({status}): {body}")]
    Api {
        status: u16,
        /// `message` field of the JSON error body, when there is one.
        message: Option<String>,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response body did not have the expected shape.
    #[error("Failed to decode Discogs response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for DiscogsError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }
}

impl DiscogsError {
    /// Build an [`DiscogsError::Api`] from a failed response's status and body.
    pub fn from_response(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        Self::Api {
            status,
            message,
            body,
        }
    }

    /// The error message reported by Discogs, if the failure came from it.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether Discogs rejected the request for exceeding its rate limit.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Self::Api {
                status, message, ..
            } => *status == TOO_MANY_REQUESTS || message.as_deref() == Some(RATE_LIMIT_MESSAGE),
            _ => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}
