//! Error taxonomy for the feed pipeline.
//!
//! Only fetch-level failures are represented here. A response that parses as
//! JSON but carries no `items` array is "no content", not an error, and
//! normalization of individual items never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// The Medium account handle is not configured (or is blank).
    #[error("Medium username is not configured")]
    MissingUsername,

    #[error("Invalid feed proxy base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed proxy returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Feed proxy response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FeedError {
    /// True for errors raised before any network call was attempted.
    pub fn is_config(&self) -> bool {
        matches!(self, FeedError::MissingUsername | FeedError::InvalidBaseUrl(_))
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
