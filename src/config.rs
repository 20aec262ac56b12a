//! Feed configuration.
//!
//! The fetcher never reads the environment itself; the CLI resolves flags and
//! environment variables into a [`FeedConfig`] and hands it over explicitly.

use crate::cli::Cli;
use crate::error::{FeedError, Result};
use url::Url;

/// Public rss2json endpoint used when no proxy is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://api.rss2json.com/v1/api.json";

/// Image path shown when an article carries neither an inline image nor a thumbnail.
pub const DEFAULT_ARTICLE_IMAGE: &str = "/default-article-image.jpg";

const MEDIUM_FEED_BASE: &str = "https://medium.com/feed/@";

/// Everything the pipeline needs to know about where articles come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Medium account handle, without the leading `@`.
    pub medium_username: Option<String>,
    /// RSS-to-JSON proxy endpoint.
    pub api_base_url: String,
    /// Final fallback for [`crate::models::NormalizedArticle::img`].
    pub default_image: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            medium_username: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_image: DEFAULT_ARTICLE_IMAGE.to_string(),
        }
    }
}

impl FeedConfig {
    /// Build the configuration from parsed arguments.
    ///
    /// A blank proxy URL or default image (e.g. an empty environment
    /// variable) falls back to the built-in default.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            medium_username: cli.medium_username.clone(),
            api_base_url: or_default(&cli.api_base_url, DEFAULT_API_BASE_URL),
            default_image: or_default(&cli.default_image, DEFAULT_ARTICLE_IMAGE),
        }
    }

    /// The configured handle, trimmed and stripped of a leading `@`.
    ///
    /// Blank handles are treated as missing.
    pub fn username(&self) -> Option<&str> {
        self.medium_username
            .as_deref()
            .map(|u| u.trim().trim_start_matches('@'))
            .filter(|u| !u.is_empty())
    }

    /// Medium RSS feed URL for the configured handle.
    pub fn feed_url(&self) -> Result<String> {
        let username = self.username().ok_or(FeedError::MissingUsername)?;
        Ok(format!("{}{}", MEDIUM_FEED_BASE, username))
    }

    /// Proxy URL with the `rss_url` query parameter pointing at the Medium feed.
    pub fn request_url(&self) -> Result<Url> {
        let feed_url = self.feed_url()?;
        let mut url = Url::parse(self.api_base_url.trim())?;
        url.query_pairs_mut().append_pair("rss_url", &feed_url);
        Ok(url)
    }
}

fn or_default(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        v => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_user(username: &str) -> FeedConfig {
        FeedConfig {
            medium_username: Some(username.to_string()),
            ..FeedConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.api_base_url, "https://api.rss2json.com/v1/api.json");
        assert_eq!(config.default_image, "/default-article-image.jpg");
        assert!(config.medium_username.is_none());
    }

    #[test]
    fn test_from_cli() {
        use clap::Parser;
        let cli = Cli::parse_from([
            "garnet_insights",
            "--medium-username",
            "garnetbigdata",
            "--api-base-url",
            "https://proxy.example/api.json",
            "--default-image",
            "/fallback.webp",
        ]);
        let config = FeedConfig::from_cli(&cli);
        assert_eq!(config.username(), Some("garnetbigdata"));
        assert_eq!(config.api_base_url, "https://proxy.example/api.json");
        assert_eq!(config.default_image, "/fallback.webp");
    }

    #[test]
    fn test_from_cli_blank_values_use_defaults() {
        use clap::Parser;
        let cli = Cli::parse_from([
            "garnet_insights",
            "--api-base-url",
            "",
            "--default-image",
            "   ",
        ]);
        let config = FeedConfig::from_cli(&cli);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.default_image, DEFAULT_ARTICLE_IMAGE);
    }

    #[test]
    fn test_feed_url() {
        let config = with_user("garnetbigdata");
        assert_eq!(
            config.feed_url().unwrap(),
            "https://medium.com/feed/@garnetbigdata"
        );
    }

    #[test]
    fn test_feed_url_strips_at_and_whitespace() {
        let config = with_user("  @garnetbigdata ");
        assert_eq!(
            config.feed_url().unwrap(),
            "https://medium.com/feed/@garnetbigdata"
        );
    }

    #[test]
    fn test_missing_username() {
        let config = FeedConfig::default();
        assert!(matches!(config.feed_url(), Err(FeedError::MissingUsername)));

        let blank = with_user("   ");
        assert!(matches!(blank.request_url(), Err(FeedError::MissingUsername)));
    }

    #[test]
    fn test_request_url_encodes_feed_url() {
        let config = with_user("garnetbigdata");
        let url = config.request_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.rss2json.com/v1/api.json?rss_url=https%3A%2F%2Fmedium.com%2Ffeed%2F%40garnetbigdata"
        );
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "rss_url");
        assert_eq!(value, "https://medium.com/feed/@garnetbigdata");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = FeedConfig {
            api_base_url: "not a url".to_string(),
            ..with_user("garnetbigdata")
        };
        assert!(matches!(
            config.request_url(),
            Err(FeedError::InvalidBaseUrl(_))
        ));
    }
}
