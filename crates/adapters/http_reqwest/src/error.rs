//! HTTP-specific error type wrapping reqwest errors.

use trapcam_domain::error::TrapcamError;

/// Errors originating from the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request could not be sent or its body could not be decoded.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid base url `{0}`")]
    InvalidBaseUrl(String),
}

impl From<HttpError> for TrapcamError {
    fn from(err: HttpError) -> Self {
        Self::Fetch(Box::new(err))
    }
}
