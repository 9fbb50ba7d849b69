//!
//! Quote-of-the-day fetching with a guaranteed fallback line.
//!
//! This crate aggregates:
//! - `error` — `QuoteError`, one variant per way a fetch can fail.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the wire record, the validated `Quote`, and the fallback line.
//! - `net` — provider endpoint, timeout and user agent.
//! - `fetcher` — `QuoteFetcher`, which never returns an error to its caller.
#![warn(missing_docs)]
pub mod error;
pub mod fetcher;
pub mod net;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use fetcher::{QuoteFetcher, fetch_quote_of_day};
pub use quote::{FALLBACK_QUOTE, Quote};
pub use result::Result;
