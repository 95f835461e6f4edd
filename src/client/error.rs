//! Client-side error taxonomy
//!
//! There is no local recovery: every variant carries the service's own
//! words (or the transport's) straight through to the caller.

use thiserror::Error;

/// Errors surfaced by the platform client
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status; the body is kept verbatim
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not the JSON the endpoint is documented to return
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn decode(url: &str, source: reqwest::Error) -> Self {
        ApiError::Decode {
            url: url.to_string(),
            source,
        }
    }
}
