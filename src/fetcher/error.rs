use thiserror::Error;

/// Why a single attempt at a year's request did not yield records.
#[derive(Debug, Error)]
pub enum FetchError {
    // Connect, DNS, timeout and body read failures
    #[error("Network request failed for {url}")]
    NetworkRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failed for {url} with status {status}: {body}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Unexpected response body from {url}")]
    MalformedBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Whether the fetcher waits `retry_pause` before the next attempt.
    /// Status failures retry immediately.
    pub fn pauses_before_retry(&self) -> bool {
        !matches!(self, FetchError::HttpStatus { .. })
    }

    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
