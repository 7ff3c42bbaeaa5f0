//! Advisor error types.

use thiserror::Error;

/// Errors from the language-model advisor.
///
/// The dialogue never surfaces these directly. Unavailability falls back to
/// local matching; a declined or malformed ranking reads as "no match".
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// No API key or endpoint is configured.
    #[error("advisor is not configured")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The endpoint returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The model answered that nothing in the table matches.
    #[error("advisor found no matching disease")]
    Declined,

    /// The reply is not in the requested shape.
    #[error("malformed advisor reply: {0}")]
    Malformed(String),
}

impl AdvisorError {
    /// Whether the advisor could not be reached at all, as opposed to
    /// answering with something unusable.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::NotConfigured | Self::Http(_) | Self::Api { .. } | Self::RateLimited { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_replies_are_not_unavailability() {
        assert!(AdvisorError::NotConfigured.is_unavailable());
        assert!(
            AdvisorError::Api {
                status: 503,
                message: String::new()
            }
            .is_unavailable()
        );
        assert!(!AdvisorError::Declined.is_unavailable());
        assert!(!AdvisorError::Malformed("x".into()).is_unavailable());
    }
}
