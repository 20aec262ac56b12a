//! Description sanitizer.
//!
//! Medium feed bodies are HTML with Markdown leftovers, and most of them open
//! with a photo credit ("Photo by ... on Unsplash"). Naive truncation would
//! surface the credit instead of the article, so the body goes through a fixed
//! sequence of cleanup steps before it is cut to card length:
//!
//! 1. [`strip_html_tags`]
//! 2. [`strip_markdown`]
//! 3. [`collapse_whitespace`]
//! 4. [`remove_unsplash_credits`]
//! 5. [`remove_url_credits`]
//! 6. [`remove_credit_phrases`]
//! 7. [`remove_leading_attribution`]
//! 8. [`collapse_whitespace`] again
//! 9. [`skip_attribution_sentences`]
//! 10. trim and [`upcase`]
//! 11. [`truncate_summary`]
//!
//! Every step is total: a pattern that does not match leaves the text alone.
//! The attribution patterns are a best-effort list, not an exhaustive one.

use crate::utils::upcase;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum summary length in characters, not counting the ellipsis.
pub const MAX_SUMMARY_CHARS: usize = 150;

/// Segments this short are never adopted as the summary by step 9.
const MIN_SENTENCE_CHARS: usize = 10;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"#{1,6}\s").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static UNSPLASH_CREDIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Photo|Image) (?:from|by) [^.!?]*?on Unsplash[.!?]?\s*").unwrap()
});
static URL_CREDITS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)(?:Photo|Image) from https?://\S+\s*").unwrap(),
        Regex::new(r"(?i)(?:Photo|Image|Source): https?://\S+\s*").unwrap(),
    ]
});
static CREDIT_PHRASES: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)(?:Photo|Image) credit: [^.!?]*[.!?]?\s*").unwrap(),
        Regex::new(r"(?i)\((?:Photo|Image): [^)]*\)\s*").unwrap(),
    ]
});
static LEADING_ATTRIBUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:Photo|Image|Source|Credit)(?:\s*[:;]\s*|\s+)[^.!?]*[.!?]?\s*").unwrap()
});
static ATTRIBUTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:Photo|Image|Source|Credit|By)\s").unwrap());
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Turn a raw feed description into a plain-text card summary.
///
/// # Examples
///
/// ```ignore
/// let desc = "**Photo from Jane Doe on Unsplash.** Not all customers behave the same.";
/// assert_eq!(clean_description(desc), "Not all customers behave the same.");
/// ```
pub fn clean_description(html: &str) -> String {
    let text = strip_html_tags(html);
    let text = strip_markdown(&text);
    let text = collapse_whitespace(&text);
    let text = remove_unsplash_credits(&text);
    let text = remove_url_credits(&text);
    let text = remove_credit_phrases(&text);
    let text = remove_leading_attribution(&text);
    let text = collapse_whitespace(&text);
    let text = skip_attribution_sentences(&text);
    let text = upcase(text.trim());
    truncate_summary(&text)
}

/// Remove anything that looks like an HTML tag.
pub fn strip_html_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Remove bold/italic asterisks and `#` heading markers.
pub fn strip_markdown(text: &str) -> String {
    let text = EMPHASIS.replace_all(text, "");
    HEADING.replace_all(&text, "").into_owned()
}

/// Collapse whitespace runs (newlines included) to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Remove "Photo/Image from|by ... on Unsplash" wherever it occurs.
pub fn remove_unsplash_credits(text: &str) -> String {
    UNSPLASH_CREDIT.replace_all(text, "").into_owned()
}

/// Remove credits that point at a bare URL ("Photo from https://...", "Source: https://...").
pub fn remove_url_credits(text: &str) -> String {
    URL_CREDITS
        .iter()
        .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
}

/// Remove "Photo credit: ..." sentences and "(Photo: ...)" asides.
pub fn remove_credit_phrases(text: &str) -> String {
    CREDIT_PHRASES
        .iter()
        .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
}

/// Remove an attribution clause at the very start, up to its sentence end.
pub fn remove_leading_attribution(text: &str) -> String {
    LEADING_ATTRIBUTION.replace(text, "").into_owned()
}

/// If the text still opens with an attribution word, adopt the first later
/// sentence that is long enough and not itself an attribution.
///
/// Text is returned unchanged when no such sentence exists.
pub fn skip_attribution_sentences(text: &str) -> String {
    if !ATTRIBUTION_START.is_match(text) {
        return text.to_string();
    }
    SENTENCE_END
        .split(text)
        .skip(1)
        .map(str::trim)
        .find(|part| {
            part.chars().count() > MIN_SENTENCE_CHARS && !ATTRIBUTION_START.is_match(part)
        })
        .unwrap_or(text)
        .to_string()
}

/// Cut text longer than [`MAX_SUMMARY_CHARS`] and append `...`.
pub fn truncate_summary(text: &str) -> String {
    match text.char_indices().nth(MAX_SUMMARY_CHARS) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
