//! Display fields derived from a raw feed item.
//!
//! All three functions are total: odd input produces a best-effort value or
//! `None`, never a panic.

use crate::sanitize::strip_html_tags;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Average adult reading speed used for the estimate.
pub const WORDS_PER_MINUTE: usize = 200;

static IMG_SRC: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<img[^>]+src="([^">]+)""#).unwrap());

/// Render a publication date as `August 2, 2025`.
///
/// Accepts RFC 3339, RFC 2822, the proxy's `YYYY-MM-DD HH:MM:SS` and bare
/// `YYYY-MM-DD`. Instants with an offset are rendered in UTC. Anything else
/// is returned trimmed but otherwise unchanged.
pub fn format_date(pub_date: &str) -> String {
    match parse_date(pub_date.trim()) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => {
            tracing::debug!(pub_date, "Unrecognized publication date");
            pub_date.trim().to_string()
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Number of whole minutes needed to read `words` words, at least one.
pub fn read_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Estimate reading time from the raw description.
///
/// Returns `None` when the body has no words, so the caller can substitute
/// its default label.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(estimate_read_time(&"word ".repeat(450)).as_deref(), Some("3 mins Read"));
/// ```
pub fn estimate_read_time(description: &str) -> Option<String> {
    let words = strip_html_tags(description).split_whitespace().count();
    if words == 0 {
        return None;
    }
    let minutes = read_minutes(words);
    let unit = if minutes > 1 { "mins" } else { "min" };
    Some(format!("{} {} Read", minutes, unit))
}

/// `src` of the first `<img>` tag in the description, if any.
pub fn extract_image(description: &str) -> Option<String> {
    IMG_SRC
        .captures(description)
        .map(|caps| caps[1].to_string())
}
