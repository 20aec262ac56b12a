//! Data models for feed items and their display-ready representations.
//!
//! This module defines the core data structures used throughout the application:
//! - [`RawFeedItem`]: Untrusted item as returned by the RSS-to-JSON proxy
//! - [`NormalizedArticle`]: Sanitized record the website renders as an article card
//! - [`ArticleFeed`]: The document written for the website, live or fallback
//!
//! The proxy's field names are camelCase (`pubDate`), hence the serde renames.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A raw post entry as returned by the feed proxy.
///
/// Every field is optional on the wire. Strings that arrive as `null`,
/// numbers or booleans are coerced so that one odd item can never fail a
/// whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawFeedItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// HTML body, possibly with Markdown markers and a photo credit.
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(rename = "pubDate", default, deserialize_with = "lenient_string")]
    pub pub_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub guid: Option<String>,
}

impl RawFeedItem {
    /// Build an item from one element of the proxy's `items` array.
    ///
    /// Anything that is not a JSON object becomes an empty item.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value(value) {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed feed item; using empty fields");
                Self::default()
            }
        }
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value))
}

/// The proxy's response envelope.
///
/// rss2json answers `{"status": "ok", "feed": {...}, "items": [...]}` on
/// success and `{"status": "error", "message": "..."}` when it cannot read
/// the feed.
#[derive(Debug, Default)]
pub struct FeedEnvelope {
    pub status: Option<String>,
    pub message: Option<String>,
    pub items: Vec<Value>,
}

impl FeedEnvelope {
    /// Read the envelope out of an already-parsed JSON body.
    ///
    /// A body without an `items` array yields no items.
    pub fn from_value(body: &Value) -> Self {
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            status: text("status"),
            message: text("message"),
            items: body
                .get("items")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("error"))
    }
}

/// A display-ready article card.
///
/// Every field is populated: sanitizer and derivers fall back to defaults
/// rather than leaving anything empty that the card would render as broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedArticle {
    /// `guid` when present, otherwise `link`.
    pub id: String,
    pub title: String,
    /// Plain-text summary, at most 150 characters plus an ellipsis.
    pub desc: String,
    /// Long calendar date, e.g. `August 2, 2025`.
    pub date: String,
    /// Reading-time label, e.g. `4 mins Read`.
    pub reads: String,
    pub img: String,
    pub link: String,
}

/// Where the articles in an [`ArticleFeed`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
    /// Fetched from Medium; may legitimately be empty.
    Live,
    /// The static list substituted after a failed fetch.
    Fallback,
}

/// The JSON document the website consumes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArticleFeed {
    pub source: FeedSource,
    /// RFC 3339 UTC timestamp of when the document was produced.
    pub generated_at: String,
    pub articles: Vec<NormalizedArticle>,
}
