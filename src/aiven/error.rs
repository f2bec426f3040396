//! Aiven API errors
//!
//! Error kinds raised by the gateway and the resource operations built on it.

/// Errors produced while talking to the Aiven API.
#[derive(Debug, thiserror::Error)]
pub enum AivenError {
    /// The request body could not be encoded as JSON.
    #[error("unable to json marshal input: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request could not complete or the response body could not be read.
    /// Covers network failures and timeouts.
    #[error("api call failed, {method} {url}: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape the caller expected.
    #[error("unable to decode response: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The credential exchange was rejected.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The remote service reported an error for the operation.
    #[error("{0}")]
    Business(String),
}

impl AivenError {
    /// True when the error came from a request that ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, AivenError::Transport { source, .. } if source.is_timeout())
    }
}
