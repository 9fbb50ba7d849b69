//! Endpoint constants for the quote provider.
use std::time::Duration;

/// ZenQuotes "quote of the day" endpoint. Returns a JSON array with one record.
pub const QUOTE_URL: &str = "https://zenquotes.io/api/today";
/// Upper bound for the whole request, connect through body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
/// Value sent in the `User-Agent` header.
pub const USER_AGENT: &str = "dotfiles-quote-fetcher/1.0";
