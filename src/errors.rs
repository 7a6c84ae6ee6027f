use thiserror::Error;

/// Transport-level failure for the single feed request.
///
/// Any of these is fatal for the run: the error is reported and no
/// playlist file is written. Malformed per-event data is not represented
/// here; it degrades to defaults during the build instead.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Request did not complete within the client timeout
    #[error("Connection timeout after {0}s")]
    Timeout(u64),

    /// DNS/TCP/TLS level failure before a response arrived
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FeedError::Timeout(crate::api::FEED_TIMEOUT_SECS)
        } else if let Some(status) = err.status() {
            FeedError::Status(status.as_u16())
        } else if err.is_decode() {
            FeedError::Parse(err.to_string())
        } else {
            FeedError::Connection(err.to_string())
        }
    }
}
