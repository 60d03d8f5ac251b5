// src/error.rs
// =============================================================================
// Errors that abort a whole analysis.
//
// Only problems with the *target page itself* end up here: a bad target URL,
// a failed fetch, an error status, an unreadable body. Everything that goes
// wrong with an individual link is downgraded to "inaccessible" inside the
// link checker and never surfaces as an error.
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("missing URL - please provide a valid URL like https://example.com")]
    EmptyUrl,

    #[error("invalid URL format '{url}' - please enter a valid URL like https://example.com")]
    InvalidUrl { url: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: received status {status} for URL {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}: {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
