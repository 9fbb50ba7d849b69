//! Fetching the quote of the day with a guaranteed fallback.
//!
//! [`QuoteFetcher::try_fetch`] runs the whole chain (request, status check,
//! body read, parse, validation) and reports what went wrong.
//! [`QuoteFetcher::fetch`] is the only place where that result is collapsed to
//! a printable line: any error, or a panic raised along the way, yields
//! [`FALLBACK_QUOTE`].
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::error::QuoteError;
use crate::net::{QUOTE_URL, REQUEST_TIMEOUT, USER_AGENT};
use crate::quote::{FALLBACK_QUOTE, Quote, parse_quote};
use crate::result::Result;

/// One-shot HTTP fetcher for the quote of the day.
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    url: String,
    timeout: Duration,
}

impl Default for QuoteFetcher {
    fn default() -> Self {
        QuoteFetcher::new(QUOTE_URL)
    }
}

impl QuoteFetcher {
    /// Creates a fetcher for `url` with the default request timeout.
    pub fn new(url: impl Into<String>) -> Self {
        QuoteFetcher {
            url: url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Replaces the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint this fetcher queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs a single GET and parses the first quote record.
    pub fn try_fetch(&self) -> Result<Quote> {
        let client = Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        debug!("Requesting quote of the day from {}", self.url);
        let response = client.get(&self.url).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(QuoteError::Status(status.as_u16()));
        }

        let body = response.bytes()?;
        parse_quote(&body)
    }

    /// Returns the quote of the day as `"<text> - <author>"`, or
    /// [`FALLBACK_QUOTE`] if it cannot be obtained for any reason.
    pub fn fetch(&self) -> String {
        match panic::catch_unwind(AssertUnwindSafe(|| self.try_fetch())) {
            Ok(Ok(quote)) => quote.to_string(),
            Ok(Err(e)) => {
                debug!("Using fallback quote: {}", e);
                FALLBACK_QUOTE.to_string()
            }
            Err(_) => {
                debug!("Using fallback quote: fetch panicked");
                FALLBACK_QUOTE.to_string()
            }
        }
    }
}

/// Fetches the quote of the day from the default provider.
pub fn fetch_quote_of_day() -> String {
    QuoteFetcher::default().fetch()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_provider() {
        let fetcher = QuoteFetcher::default();
        assert_eq!(fetcher.url(), QUOTE_URL);
        assert_eq!(fetcher.timeout, REQUEST_TIMEOUT);
    }

    #[test]
    fn unparsable_url_falls_back() {
        let fetcher = QuoteFetcher::new("not a url");
        assert!(fetcher.try_fetch().is_err());
        assert_eq!(fetcher.fetch(), FALLBACK_QUOTE);
    }
}
