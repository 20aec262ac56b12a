//! Command-line interface definitions for Garnet Insights.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Feed settings can be provided via command-line flags or the same
//! environment variables the website build uses.

use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_ARTICLE_IMAGE};
use crate::fetcher::DEFAULT_ARTICLE_COUNT;
use clap::Parser;

/// Command-line arguments for the Garnet Insights article fetcher.
///
/// # Examples
///
/// ```sh
/// # Print the two latest articles as JSON
/// garnet_insights --medium-username garnetbigdata
///
/// # Write four articles to ./public/api/articles.json
/// garnet_insights -n 4 -j ./public/api
///
/// # Fail instead of writing the static fallback list
/// garnet_insights --no-fallback
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of articles to fetch
    #[arg(short = 'n', long, env = "MEDIUM_ARTICLE_COUNT", default_value_t = DEFAULT_ARTICLE_COUNT)]
    pub count: usize,

    /// Medium account handle whose feed is fetched
    #[arg(long, env = "NEXT_PUBLIC_MEDIUM_USERNAME")]
    pub medium_username: Option<String>,

    /// RSS-to-JSON proxy endpoint
    #[arg(long, env = "NEXT_PUBLIC_MEDIUM_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Image used when an article has no image of its own
    #[arg(long, env = "NEXT_PUBLIC_DEFAULT_ARTICLE_IMAGE", default_value = DEFAULT_ARTICLE_IMAGE)]
    pub default_image: String,

    /// Output directory for articles.json (prints to stdout when omitted)
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// HTTP timeout for the feed proxy request, in seconds (0 disables it)
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,

    /// Exit with an error instead of writing the static fallback list
    #[arg(long)]
    pub no_fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "garnet_insights",
            "--count",
            "4",
            "--medium-username",
            "garnetbigdata",
            "--json-output-dir",
            "./json",
        ]);

        assert_eq!(cli.count, 4);
        assert_eq!(cli.medium_username.as_deref(), Some("garnetbigdata"));
        assert_eq!(cli.json_output_dir.as_deref(), Some("./json"));
        assert!(!cli.no_fallback);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "garnet_insights",
            "-n",
            "3",
            "-j",
            "/tmp/json",
            "--medium-username",
            "someone",
        ]);

        assert_eq!(cli.count, 3);
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
    }

    #[test]
    fn test_cli_proxy_flags() {
        let cli = Cli::parse_from([
            "garnet_insights",
            "--api-base-url",
            "https://proxy.example/v1/api.json",
            "--default-image",
            "/placeholder.webp",
            "--timeout-secs",
            "5",
            "--no-fallback",
        ]);

        assert_eq!(cli.api_base_url, "https://proxy.example/v1/api.json");
        assert_eq!(cli.default_image, "/placeholder.webp");
        assert_eq!(cli.timeout_secs, 5);
        assert!(cli.no_fallback);
    }
}
