//! Error type for the quote fetch-and-parse chain.
//!
//! Each variant corresponds to one way the quote of the day can fail to
//! materialize. None of them ever reaches the caller of
//! [`QuoteFetcher::fetch`](crate::fetcher::QuoteFetcher::fetch); they exist so
//! the chain can use `?` and so the fallback reason can be logged.
use thiserror::Error;

/// Unified error type for fetching and parsing a quote.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The transport could not reach the quote provider.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The provider answered with something other than `200 OK`.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Any other transport failure (TLS setup, body read, redirect loop).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The body is not valid UTF-8 JSON.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body is valid JSON but not the expected array of records.
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// The provider returned an empty array.
    #[error("Response contained no quotes")]
    EmptyResponse,

    /// A required field was blank after trimming.
    #[error("Field is empty: {0}")]
    EmptyField(&'static str),
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            QuoteError::Timeout(err.to_string())
        } else if err.is_connect() {
            QuoteError::Connect(err.to_string())
        } else {
            QuoteError::Http(err.to_string())
        }
    }
}
