//! Quote data model and response parsing.
//!
//! The provider answers with a JSON array of records shaped like
//! `{"q": "<quote text>", "a": "<author>", ...}`. Only the first record is
//! used; any extra keys in it are ignored.
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::QuoteError;
use crate::result::Result;

/// Line printed whenever the quote of the day cannot be obtained.
pub const FALLBACK_QUOTE: &str =
    "If you love life, do not waste time, because time is what life is made of. - Bruce Lee";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A single record as sent by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRecord {
    /// Quote text (`"q"` on the wire).
    #[serde(rename = "q")]
    pub quote_text: String,
    /// Author name (`"a"` on the wire).
    #[serde(rename = "a")]
    pub author: String,
}

impl QuoteRecord {
    /// Trim both fields and reject the record if either ends up empty.
    pub fn into_quote(self) -> Result<Quote> {
        let text = self.quote_text.trim();
        if text.is_empty() {
            return Err(QuoteError::EmptyField("q"));
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(QuoteError::EmptyField("a"));
        }

        Ok(Quote {
            text: text.to_string(),
            author: author.to_string(),
        })
    }
}

/// A validated quote with non-empty, trimmed text and author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Quote text.
    pub text: String,
    /// Author name.
    pub author: String,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.text, self.author)
    }
}

/// Parse a raw response body into a [`Quote`].
///
/// The body must be UTF-8 JSON; a leading byte order mark is skipped.
/// Elements after the first one are never inspected, so a malformed tail does
/// not invalidate a good first record.
pub fn parse_quote(body: &[u8]) -> Result<Quote> {
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    let document: Value = serde_json::from_slice(body)?;
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(QuoteError::Shape(format!(
                "expected an array of quotes, got {}",
                kind_of(&other)
            )));
        }
    };

    let first = items.into_iter().next().ok_or(QuoteError::EmptyResponse)?;
    let record: QuoteRecord =
        serde_json::from_value(first).map_err(|e| QuoteError::Shape(e.to_string()))?;
    record.into_quote()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
