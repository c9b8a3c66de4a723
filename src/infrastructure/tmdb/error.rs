use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("movie database unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("movie database returned {0}")]
    Status(StatusCode),
    #[error("malformed movie database response: {0}")]
    Malformed(#[source] serde_json::Error),
}
